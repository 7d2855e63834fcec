//! Signal strength indicator
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signal to noise ratio, as described by the single digit
/// signal strength indicator of each V2 observation.
#[derive(Default, PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SNR {
    /// Unknown, don't care, or SNR ~= 0 dB/Hz
    #[default]
    DbHz0,
    /// SNR < 12 dB/Hz
    DbHz12,
    /// 12 dB/Hz <= SNR < 17 dB/Hz
    DbHz12_17,
    /// 18 dB/Hz <= SNR < 23 dB/Hz
    DbHz18_23,
    /// 24 dB/Hz <= SNR < 29 dB/Hz
    DbHz24_29,
    /// 30 dB/Hz <= SNR < 35 dB/Hz
    DbHz30_35,
    /// 36 dB/Hz <= SNR < 41 dB/Hz
    DbHz36_41,
    /// 42 dB/Hz <= SNR < 47 dB/Hz
    DbHz42_47,
    /// 48 dB/Hz <= SNR < 53 dB/Hz
    DbHz48_53,
    /// SNR >= 54 dB/Hz
    DbHz54,
}

impl std::fmt::LowerHex for SNR {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl std::fmt::LowerExp for SNR {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let descriptor = match self {
            Self::DbHz0 => "<< 12 dB",
            Self::DbHz12 => "< 12 dB",
            Self::DbHz12_17 => "[12, 17[ dB",
            Self::DbHz18_23 => "[18, 23[ dB",
            Self::DbHz24_29 => "[24, 29[ dB",
            Self::DbHz30_35 => "[30, 35[ dB",
            Self::DbHz36_41 => "[36, 41[ dB",
            Self::DbHz42_47 => "[42, 47[ dB",
            Self::DbHz48_53 => "[48, 53[ dB",
            Self::DbHz54 => "> 54 dB",
        };
        f.write_str(descriptor)
    }
}

impl From<u8> for SNR {
    fn from(u: u8) -> Self {
        match u {
            1 => Self::DbHz12,
            2 => Self::DbHz12_17,
            3 => Self::DbHz18_23,
            4 => Self::DbHz24_29,
            5 => Self::DbHz30_35,
            6 => Self::DbHz36_41,
            7 => Self::DbHz42_47,
            8 => Self::DbHz48_53,
            9 => Self::DbHz54,
            _ => Self::DbHz0,
        }
    }
}

impl From<SNR> for u8 {
    fn from(snr: SNR) -> Self {
        match snr {
            SNR::DbHz0 => 0,
            SNR::DbHz12 => 1,
            SNR::DbHz12_17 => 2,
            SNR::DbHz18_23 => 3,
            SNR::DbHz24_29 => 4,
            SNR::DbHz30_35 => 5,
            SNR::DbHz36_41 => 6,
            SNR::DbHz42_47 => 7,
            SNR::DbHz48_53 => 8,
            SNR::DbHz54 => 9,
        }
    }
}

impl SNR {
    /// Returns true if self describes a bad signal level
    pub fn bad(self) -> bool {
        self <= SNR::DbHz18_23
    }
    /// Returns true if `self` describes a weak signal level
    pub fn weak(self) -> bool {
        self < SNR::DbHz30_35
    }
    /// Returns true if `self` describes a strong signal level, defined in standard specifications
    pub fn strong(self) -> bool {
        self >= SNR::DbHz30_35
    }
    /// Returns true if `self` is a very strong signal level
    pub fn excellent(self) -> bool {
        self > SNR::DbHz42_47
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn observation_snr() {
        let snr = SNR::from(0);
        assert_eq!(snr, SNR::DbHz0);
        assert!(snr.bad());

        let snr = SNR::from(8);
        assert_eq!(snr, SNR::DbHz48_53);
        assert!(snr.excellent());
        assert_eq!(format!("{:x}", snr), "8");
        assert_eq!(format!("{:e}", snr), "[48, 53[ dB");

        let snr = SNR::from(5);
        assert!(snr.strong());
        assert!(!snr.weak());

        assert_eq!(SNR::from(12), SNR::DbHz0);
        for u in 0..10 {
            assert_eq!(u8::from(SNR::from(u)), u);
        }
    }
}

//! Observation RINEX module
mod lli;
mod parsing;
mod snr;

pub use lli::LliFlags;
pub use snr::SNR;

pub(crate) use parsing::{parse_observation_field, read_satellite_records};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ObservationData] is one 16 column field of a satellite record:
/// the F14.3 observed value, followed by the single digit
/// loss of lock and signal strength indicators.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationData {
    /// Observed value. None when it was not observed
    /// (blank field), which is not the same as 0.0.
    pub value: Option<f64>,
    /// Loss of lock indicator (0 when blank)
    pub lli: u8,
    /// Signal strength indicator (0 when blank)
    pub ssi: u8,
}

impl ObservationData {
    /// Builds a new [ObservationData] with blank indicators
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }
    /// Copies and attaches loss of lock indicator
    pub fn with_lli(&self, lli: u8) -> Self {
        let mut s = *self;
        s.lli = lli;
        s
    }
    /// Copies and attaches signal strength indicator
    pub fn with_ssi(&self, ssi: u8) -> Self {
        let mut s = *self;
        s.ssi = ssi;
        s
    }
    /// Returns true if this observation was not made
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
    /// Returns [LliFlags] view of the loss of lock indicator
    pub fn lli_flags(&self) -> LliFlags {
        LliFlags::from(self.lli)
    }
    /// Returns [SNR] view of the signal strength indicator
    pub fn snr(&self) -> SNR {
        SNR::from(self.ssi)
    }
    /// Returns true if this observation is not affected by a possible
    /// cycle slip and its signal was strong enough
    pub fn is_ok(&self) -> bool {
        !self.is_missing()
            && !self.lli_flags().intersects(LliFlags::LOCK_LOSS)
            && (self.ssi == 0 || self.snr().strong())
    }
}

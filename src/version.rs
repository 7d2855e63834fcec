//! RINEX revision
use crate::{constants::MAX_SUPPORTED_VERSION, error::ParsingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RINEX revision, as described in the first header line.
/// Minor # is expressed in hundredths: "2.1" and "2.10"
/// both describe revision 2.10. Finer digits round up to the next
/// hundredth ("2.111" is 2.12), so ordering is preserved.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = s
            .parse::<f64>()
            .map_err(|_| ParsingError::VersionParsing(s.to_string()))?;
        if !(0.0..256.0).contains(&value) {
            return Err(ParsingError::VersionParsing(s.to_string()));
        }
        let major = value.trunc();
        let hundredths = (value - major) * 100.0;
        let mut minor = hundredths.round();
        if hundredths - minor > 1.0E-6 {
            minor += 1.0;
        }
        Ok(Self {
            major: major as u8,
            minor: minor as u8,
        })
    }
}

impl Version {
    /// Builds a new [Version]
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
    /// Returns true if this revision can be decoded
    pub fn is_supported(&self) -> bool {
        (self.major, self.minor) <= MAX_SUPPORTED_VERSION
    }
}

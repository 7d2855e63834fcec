//! `RINEX` types description
use crate::error::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes all known RINEX V2 file types,
/// identified by a single character (column 20 of the first header line)
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// Describes Observation Data (OBS),
    /// Phase & Pseudo range measurements
    #[default]
    ObservationData,
    /// Describes Navigation Data (NAV)
    NavigationData,
    /// Glonass Navigation Data
    GlonassNavigationData,
    /// Describes Meteorological data (MET)
    MeteoData,
}

impl std::fmt::Display for Type {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ObservationData => write!(fmt, "OBSERVATION DATA"),
            Self::NavigationData => write!(fmt, "NAVIGATION DATA"),
            Self::GlonassNavigationData => write!(fmt, "GLONASS NAV DATA"),
            Self::MeteoData => write!(fmt, "METEOROLOGICAL DATA"),
        }
    }
}

impl TryFrom<char> for Type {
    type Error = ParsingError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'O' => Ok(Self::ObservationData),
            'N' => Ok(Self::NavigationData),
            'G' => Ok(Self::GlonassNavigationData),
            'M' => Ok(Self::MeteoData),
            c => Err(ParsingError::UnsupportedFileType(c)),
        }
    }
}

//! Hardware: receiver, antenna informations
use crate::columns::column;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GNSS receiver description (`REC # / TYPE / VERS`)
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Receiver {
    /// Receiver (hardware) model
    pub model: String,
    /// Receiver (hardware) identification info
    pub sn: String, // serial #
    /// Receiver embedded software info
    pub firmware: String, // firmware #
}

impl Receiver {
    /// Parses [Receiver] from the 60 first columns of its header line
    pub(crate) fn parse(content: &str) -> Self {
        Self {
            sn: column(content, 0, 20).trim().to_string(),
            model: column(content, 20, 40).trim().to_string(),
            firmware: column(content, 40, 60).trim().to_string(),
        }
    }
}

/// Receiver antenna description (`ANT # / TYPE`)
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Antenna {
    /// Hardware model / make descriptor
    pub model: String,
    /// Serial number / identification number
    pub sn: String,
}

impl Antenna {
    /// Parses [Antenna] from the 60 first columns of its header line
    pub(crate) fn parse(content: &str) -> Self {
        Self {
            sn: column(content, 0, 20).trim().to_string(),
            model: column(content, 20, 40).trim().to_string(),
        }
    }
}

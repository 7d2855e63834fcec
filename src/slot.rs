//! Satellite slot space.
//!
//! Decoded data is stored in a fixed size slot space:
//! GPS vehicles occupy slots 0-63 (PRN 1-64), Glonass vehicles
//! slots 64-127 (PRN 1-64). Other vehicles do not have a slot.
use gnss::prelude::{Constellation, SV};

use crate::constants::{GLONASS_SLOT_OFFSET, MAX_PRN, TOTAL_SLOTS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index in the satellite slot space
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot(pub usize);

impl Slot {
    /// Returns the zero padded two digit label of this slot,
    /// used to index the final time series.
    pub fn label(&self) -> String {
        format!("{:02}", self.0)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// [SlotSpace] maps satellites to their [Slot]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlotSpace {
    size: usize,
}

impl Default for SlotSpace {
    fn default() -> Self {
        Self::new(TOTAL_SLOTS)
    }
}

impl SlotSpace {
    /// Builds a new [SlotSpace] of given size
    pub fn new(size: usize) -> Self {
        Self { size }
    }
    /// Number of slots
    pub fn size(&self) -> usize {
        self.size
    }
    /// Returns [Slot] of given [SV], or None when this vehicle
    /// is not supported (or does not fit in this space).
    pub fn slot(&self, sv: SV) -> Option<Slot> {
        if sv.prn == 0 || sv.prn > MAX_PRN {
            return None;
        }
        let index = match sv.constellation {
            Constellation::GPS => (sv.prn - 1) as usize,
            Constellation::Glonass => (sv.prn - 1) as usize + GLONASS_SLOT_OFFSET,
            _ => return None,
        };
        if index < self.size {
            Some(Slot(index))
        } else {
            None
        }
    }
}

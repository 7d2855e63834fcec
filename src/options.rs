//! Parsing options
use crate::{
    constants::{DEFAULT_REFERENCE_OBSERVABLE, DEFAULT_WINDOW_SIZE, TOTAL_SLOTS},
    observable::Observable,
};

/// [ParsingOptions] tune the record decoding process.
/// None of them modifies the decoded content, except for the
/// reference [Observable] that drives the satellite cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingOptions {
    /// Size of the satellite slot space
    pub slot_space: usize,
    /// Number of epochs batched before being folded into the time series
    pub window_size: usize,
    /// Satellites that never observed this [Observable] are dropped
    pub reference: Observable,
}

impl Default for ParsingOptions {
    fn default() -> Self {
        Self {
            slot_space: TOTAL_SLOTS,
            window_size: DEFAULT_WINDOW_SIZE,
            reference: Observable::new(DEFAULT_REFERENCE_OBSERVABLE),
        }
    }
}

impl ParsingOptions {
    /// Copies and redefines the slot space size.
    /// GPS needs 64 slots, Glonass another 64.
    pub fn with_slot_space(&self, size: usize) -> Self {
        let mut s = self.clone();
        s.slot_space = size;
        s
    }
    /// Copies and redefines the batching window (min. 1 epoch)
    pub fn with_window_size(&self, size: usize) -> Self {
        let mut s = self.clone();
        s.window_size = size.max(1);
        s
    }
    /// Copies and redefines the reference [Observable]
    pub fn with_reference(&self, observable: Observable) -> Self {
        let mut s = self.clone();
        s.reference = observable;
        s
    }
}

//! Observables, as declared by `# / TYPES OF OBSERV`
use std::borrow::Borrow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical nature of an [Observable]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObservableKind {
    /// Pseudo range observation (C, P codes)
    PseudoRange,
    /// Carrier phase observation
    Phase,
    /// Doppler shift observation
    Doppler,
    /// Raw signal strength observation
    SSI,
    /// Not described by RINEX V2 (T: transit, ..)
    Other,
}

/// Observable is the two character code (like "C1", "L2")
/// of an observation. The order in which they are declared in the
/// header defines the layout of every observation record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Observable {
    code: String,
}

impl Observable {
    /// Builds an [Observable] from its code
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_string(),
        }
    }
    /// Returns the code of this [Observable]
    pub fn as_str(&self) -> &str {
        &self.code
    }
    /// Returns physical nature of this [Observable]
    pub fn kind(&self) -> ObservableKind {
        match self.code.chars().next() {
            Some('C') | Some('P') => ObservableKind::PseudoRange,
            Some('L') => ObservableKind::Phase,
            Some('D') => ObservableKind::Doppler,
            Some('S') => ObservableKind::SSI,
            _ => ObservableKind::Other,
        }
    }
    pub fn is_pseudorange_observable(&self) -> bool {
        self.kind() == ObservableKind::PseudoRange
    }
    pub fn is_phase_observable(&self) -> bool {
        self.kind() == ObservableKind::Phase
    }
    pub fn is_doppler_observable(&self) -> bool {
        self.kind() == ObservableKind::Doppler
    }
    pub fn is_ssi_observable(&self) -> bool {
        self.kind() == ObservableKind::SSI
    }
}

impl std::fmt::Display for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for Observable {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// Allows map lookups by code, like `observations.get("C1")`
impl Borrow<str> for Observable {
    fn borrow(&self) -> &str {
        &self.code
    }
}

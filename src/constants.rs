//! Format constants of RINEX V2 Observation files

/// Highest supported revision, as written in the `RINEX VERSION / TYPE` line
pub const MAX_SUPPORTED_VERSION: (u8, u8) = (2, 11);

/// Satellite slot space: GPS [0, 63], Glonass [64, 127],
/// remaining slots are reserved for a third system.
pub const TOTAL_SLOTS: usize = 132;

/// Highest PRN # stored per constellation
pub const MAX_PRN: u8 = 64;

/// First Glonass slot
pub const GLONASS_SLOT_OFFSET: usize = 64;

/// Two digit years at or above this value belong to the 20th century
pub const YEAR_PIVOT: i32 = 80;

/// Default number of epochs batched before being folded into the time series
pub const DEFAULT_WINDOW_SIZE: usize = 1_000;

/// Default observable whose complete absence discards a satellite
pub const DEFAULT_REFERENCE_OBSERVABLE: &str = "C1";

/// Header lines are padded to this width before any field extraction
pub const HEADER_LINE_WIDTH: usize = 80;

/// Header label field
pub const LABEL_START: usize = 60;

/// Minimal width of a padded observation line
pub const MIN_RECORD_WIDTH: usize = 70;

/// One observation: F14.3 value + LLI + SSI
pub const OBSERVATION_WIDTH: usize = 16;

/// Numerical part of an observation
pub const OBSERVATION_F14_WIDTH: usize = 14;

/// Observations per record line
pub const OBSERVATIONS_PER_LINE: usize = 5;

/// Observables declared per `# / TYPES OF OBSERV` line
pub const OBSERVABLES_PER_HEADER_LINE: usize = 9;

/// Satellites described per epoch line
pub const SATELLITES_PER_LINE: usize = 12;

/// "SNN" satellite identifier width
pub const SVNN_SIZE: usize = 3;

/// First satellite identifier column of an epoch line
pub const SATELLITE_LIST_START: usize = 32;

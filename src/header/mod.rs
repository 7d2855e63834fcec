//! Describes a `RINEX` V2 Observation header
use gnss::prelude::Constellation;
use hifitime::{Duration, Epoch, TimeScale};

use crate::{
    hardware::{Antenna, Receiver},
    observable::Observable,
    types::Type,
    version::Version,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod label;
mod parsing;

pub(crate) use label::Label;

/// Marker name, when not described or left blank
pub const UNKNOWN_MARKER: &str = "UNKNOWN";

/// Describes a RINEX V2 Observation file header.
/// Created once, when parsing starts, and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    /// revision for this `RINEX`
    pub version: Version,
    /// type of `RINEX` file
    pub rinex_type: Type,
    /// `GNSS` constellation being used.
    /// Blank system code defaults to GPS.
    pub constellation: Constellation,
    /// Comments, in order of appearance
    pub comments: Vec<String>,
    /// Station / marker name
    pub marker_name: String,
    /// Station / marker number
    pub marker_number: Option<String>,
    /// Name of observer
    pub observer: Option<String>,
    /// Name of production agency
    pub agency: Option<String>,
    /// Program that produced this file
    pub program: Option<String>,
    /// Program operator
    pub run_by: Option<String>,
    /// Date of file production
    pub date: Option<String>,
    /// Receiver information
    pub rcvr: Option<Receiver>,
    /// Receiver antenna information
    pub rcvr_antenna: Option<Antenna>,
    /// Approximate receiver position (ECEF, m)
    pub rx_position: Option<(f64, f64, f64)>,
    /// Antenna (height, eastern, northern) eccentricities, in m
    pub antenna_delta: Option<(f64, f64, f64)>,
    /// Sampling interval
    pub sampling_interval: Option<Duration>,
    /// Time of first observation
    pub time_of_first_obs: Option<Epoch>,
    /// Time of last observation
    pub time_of_last_obs: Option<Epoch>,
    /// [TimeScale] in which all epochs are expressed
    pub timescale: TimeScale,
    /// Observables, in the order in which they are stored in each record
    pub observables: Vec<Observable>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: Version::new(2, 11),
            rinex_type: Type::ObservationData,
            constellation: Constellation::GPS,
            comments: Vec::new(),
            marker_name: UNKNOWN_MARKER.to_string(),
            marker_number: None,
            observer: None,
            agency: None,
            program: None,
            run_by: None,
            date: None,
            rcvr: None,
            rcvr_antenna: None,
            rx_position: None,
            antenna_delta: None,
            sampling_interval: None,
            time_of_first_obs: None,
            time_of_last_obs: None,
            timescale: TimeScale::GPST,
            observables: Vec::new(),
        }
    }
}

impl Header {
    /// Returns all comments as a single text, one line per comment
    pub fn comment(&self) -> String {
        let mut text = String::new();
        for comment in &self.comments {
            text.push_str(comment);
            text.push('\n');
        }
        text
    }
    /// Number of observables of each record
    pub fn num_observables(&self) -> usize {
        self.observables.len()
    }
    /// Returns column index of given observable
    pub fn observable_index(&self, code: &str) -> Option<usize> {
        self.observables.iter().position(|obs| obs.as_str() == code)
    }
}

/// Identifies the satellite system of a V2 header.
/// Blank means GPS.
pub(crate) fn system_constellation(code: char) -> Option<Constellation> {
    match code {
        ' ' | 'G' => Some(Constellation::GPS),
        'R' => Some(Constellation::Glonass),
        'S' => Some(Constellation::SBAS),
        'E' => Some(Constellation::Galileo),
        'M' => Some(Constellation::Mixed),
        _ => None,
    }
}

/// Time system to use when the header does not define one
pub(crate) fn default_timescale(constellation: Constellation) -> TimeScale {
    match constellation {
        Constellation::Glonass => TimeScale::UTC,
        Constellation::Galileo => TimeScale::GST,
        _ => TimeScale::GPST,
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * RINEX V2 Observation decoder.
 * This package is shipped under the MPL-2.0 License.
 */

extern crate gnss_rs as gnss;

pub mod constants;
pub mod epoch;
pub mod error;
pub mod hardware;
pub mod header;
pub mod observable;
pub mod observation;
pub mod options;
pub mod reader;
pub mod record;
pub mod slot;
pub mod types;
pub mod version;

mod columns;

#[cfg(test)]
mod tests;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use prelude::*;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        epoch::EpochFlag,
        error::{Error, ParsingError},
        hardware::{Antenna, Receiver},
        header::Header,
        observable::{Observable, ObservableKind},
        observation::{LliFlags, ObservationData, SNR},
        options::ParsingOptions,
        reader::Reader,
        record::{Record, SatelliteSeries},
        slot::{Slot, SlotSpace},
        types::Type as RinexType,
        version::Version,
        Rinex,
    };
    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}

/// [Rinex] is a decoded RINEX V2 Observation file:
/// its [Header] section and the time series of every satellite.
#[derive(Clone, Debug, PartialEq)]
pub struct Rinex {
    /// [Header] gives general information and describes the record layout
    pub header: Header,
    /// [Record] is the per satellite time series
    pub record: Record,
}

impl Rinex {
    /// Builds a new [Rinex] from its [Header] and [Record]
    pub fn new(header: Header, record: Record) -> Self {
        Self { header, record }
    }

    /// Parse [Rinex] content by consuming any [BufRead]able interface,
    /// with default [ParsingOptions].
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ParsingError> {
        Self::parse_with_options(reader, &ParsingOptions::default())
    }

    /// Parse [Rinex] content by consuming any [BufRead]able interface.
    /// ```
    /// use std::{fs::File, io::BufReader};
    /// use rinex2_obs::prelude::*;
    ///
    /// let fd = File::open("test_resources/OBS/V2/zeck0010.11o")
    ///     .unwrap();
    ///
    /// // Only keep satellites that observed P1
    /// let opts = ParsingOptions::default()
    ///     .with_reference(Observable::new("P1"));
    ///
    /// let rinex = Rinex::parse_with_options(BufReader::new(fd), &opts)
    ///     .unwrap();
    ///
    /// for (slot, series) in rinex.record.iter() {
    ///     assert!(series.has_data("P1"), "{} did not observe P1", slot);
    /// }
    /// ```
    pub fn parse_with_options<R: BufRead>(
        reader: R,
        opts: &ParsingOptions,
    ) -> Result<Self, ParsingError> {
        let mut reader = Reader::new(reader);

        // Parses Header section (=consumes header until this point)
        let header = Header::parse(&mut reader)?;

        // Parse record (=consumes rest of this resource)
        let record = record::parse_record(&mut reader, &header, opts)?;

        Ok(Self { header, record })
    }

    /// Parses [Rinex] from local readable file.
    /// ```
    /// use rinex2_obs::prelude::*;
    ///
    /// let rinex = Rinex::from_file("test_resources/OBS/V2/zeck0010.11o")
    ///     .unwrap();
    ///
    /// assert_eq!(rinex.header.version, Version::new(2, 11));
    /// assert_eq!(rinex.header.constellation, Constellation::Mixed);
    /// assert_eq!(rinex.header.marker_name, "ZECK");
    ///
    /// // G01 is stored in slot "00"
    /// let g01 = rinex.record.get("00")
    ///     .unwrap();
    ///
    /// assert_eq!(g01.sv, SV { prn: 1, constellation: Constellation::GPS });
    ///
    /// // missing file
    /// assert!(Rinex::from_file("test_resources/OBS/V2/unknown.11o").is_err());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_file_with_options(path, &ParsingOptions::default())
    }

    /// Parses [Rinex] from local readable file, with custom [ParsingOptions].
    pub fn from_file_with_options<P: AsRef<Path>>(
        path: P,
        opts: &ParsingOptions,
    ) -> Result<Self, Error> {
        let path = path.as_ref();
        let fd = File::open(path).map_err(|source| Error::StreamUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let rinex = Self::parse_with_options(BufReader::new(fd), opts)?;
        Ok(rinex)
    }

    /// Parses [Rinex] from local gzip compressed file.
    /// Refer to [Self::from_file] for more information.
    /// ```
    /// use rinex2_obs::prelude::*;
    ///
    /// let rinex = Rinex::from_gzip_file("test_resources/OBS/V2/zeck0010.11o.gz")
    ///     .unwrap();
    ///
    /// assert_eq!(rinex.header.marker_name, "ZECK");
    /// ```
    #[cfg(feature = "flate2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "flate2")))]
    pub fn from_gzip_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let fd = File::open(path).map_err(|source| Error::StreamUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = GzDecoder::new(fd);
        let rinex = Self::parse(BufReader::new(reader))?;
        Ok(rinex)
    }

    /// Returns all comments, one per line
    pub fn comment(&self) -> String {
        self.header.comment()
    }

    /// Returns an iterator over all observed satellites,
    /// in slot order.
    pub fn sv(&self) -> impl Iterator<Item = SV> + '_ {
        self.record.values().map(|series| series.sv)
    }

    /// Returns the sampling instants, shared by all retained satellites.
    /// Epochs are carried by the satellite series: when every satellite
    /// was dropped (no reference observation), this is empty even though
    /// epochs were decoded.
    pub fn epochs(&self) -> &[Epoch] {
        self.record
            .values()
            .next()
            .map(|series| series.epochs.as_slice())
            .unwrap_or(&[])
    }

    /// Returns [SatelliteSeries] of given [SV], if it was observed
    pub fn satellite(&self, sv: SV) -> Option<&SatelliteSeries> {
        self.record.values().find(|series| series.sv == sv)
    }

    /// Returns (epoch, value) pairs of given [SV] and [Observable]
    pub fn observation_pairs(
        &self,
        sv: SV,
        observable: &str,
    ) -> Option<impl Iterator<Item = (Epoch, Option<f64>)> + '_> {
        self.satellite(sv)?.pairs(observable)
    }
}

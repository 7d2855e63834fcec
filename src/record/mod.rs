//! Observation record: epochs and satellite time series
use std::{collections::BTreeMap, io::BufRead};

use crate::{
    error::ParsingError,
    header::Header,
    observation::read_satellite_records,
    options::ParsingOptions,
    reader::Reader,
    slot::{Slot, SlotSpace},
};

#[cfg(feature = "log")]
use log::{debug, warn};

mod epoch;
mod series;

pub use epoch::{next_epoch, EpochHeader};
pub use series::SatelliteSeries;

pub(crate) use series::SeriesAccumulator;

/// Observation [Record]: [SatelliteSeries] indexed by their
/// zero padded slot label ("00" for G01, "64" for R01..).
pub type Record = BTreeMap<String, SatelliteSeries>;

/// Consumes all epochs following the [Header] section,
/// until the end of the stream.
pub fn parse_record<R: BufRead>(
    reader: &mut Reader<R>,
    header: &Header,
    opts: &ParsingOptions,
) -> Result<Record, ParsingError> {
    let space = SlotSpace::new(opts.slot_space);
    let num_obs = header.observables.len();

    let mut acc = SeriesAccumulator::new(
        &header.observables,
        space.size(),
        opts.window_size,
        &opts.reference,
    );

    let mut slots = Vec::<Option<Slot>>::new();

    while let Some(epoch) = next_epoch(reader, header.constellation, header.timescale)? {
        slots.clear();
        for sv in epoch.satellites.iter().copied() {
            let slot = sv.and_then(|sv| space.slot(sv));

            #[cfg(feature = "log")]
            if let (Some(sv), None) = (sv, slot) {
                warn!("{}: {} is not supported", epoch.epoch, sv);
            }

            slots.push(slot);
        }

        let row = acc.next_row(epoch.epoch, &epoch.satellites, &slots);
        read_satellite_records(reader, &slots, num_obs, row)?;
        acc.commit();
    }

    let record = acc.finish();

    #[cfg(feature = "log")]
    debug!("{} satellites retained", record.len());

    Ok(record)
}

//! Epoch (sampling instant) decoding
use hifitime::{Epoch, TimeScale};

use crate::{columns::column, constants::YEAR_PIVOT, error::ParsingError};

mod flag;
pub use flag::{EpochFlag, Error as EpochFlagError};

/// Old RINEX problem: YY is encoded on two digits.
/// Pivot year is 1980, first year of GPS.
pub(crate) fn resolve_two_digit_year(yy: i32) -> i32 {
    if yy >= YEAR_PIVOT {
        yy + 1900
    } else {
        yy + 2000
    }
}

/// Parses the timestamp of a V2 epoch line,
/// interpreted in given [TimeScale].
/// ```text
///  yy mm dd hh mm ss.sssssss
///  21 12 21  0  0 30.0000000
/// ```
/// Fractional seconds are truncated to the microsecond.
pub(crate) fn parse_v2_in_timescale(line: &str, ts: TimeScale) -> Result<Epoch, ParsingError> {
    let invalid = || ParsingError::EpochTimestamp(column(line, 0, 26).to_string());

    let yy = column(line, 1, 3)
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid())?;

    let mut fields = [0_u8; 5];
    for (field, (start, end)) in fields
        .iter_mut()
        .zip([(4, 6), (7, 9), (10, 12), (13, 15), (15, 18)])
    {
        *field = column(line, start, end)
            .trim()
            .parse::<u8>()
            .map_err(|_| invalid())?;
    }
    let [month, day, hh, mm, ss] = fields;

    let micros = column(line, 19, 25).trim();
    let micros = if micros.is_empty() {
        0
    } else {
        micros.parse::<u32>().map_err(|_| invalid())?
    };

    let y = resolve_two_digit_year(yy);
    Epoch::maybe_from_gregorian(y, month, day, hh, mm, ss, micros * 1000, ts)
        .map_err(|_| invalid())
}

//! Epoch line reader
use std::{io::BufRead, str::FromStr};

use gnss::prelude::{Constellation, SV};
use hifitime::{Epoch, TimeScale};

use crate::{
    columns::column,
    constants::{SATELLITES_PER_LINE, SATELLITE_LIST_START, SVNN_SIZE},
    epoch::{parse_v2_in_timescale, EpochFlag},
    error::ParsingError,
    reader::Reader,
};

#[cfg(feature = "log")]
use log::{debug, trace, warn};

/// Malformed zero timestamp, emitted by some receivers
const ZERO_EPOCH_SENTINEL: &str = "0.0000000  4  5";

/// Header information event with a single line
const EVENT_SENTINEL: &str = "          4  1";

/// Up to that many COMMENT lines may precede an epoch
const MAX_INTERLEAVED_COMMENTS: usize = 5;

/// Decoded epoch line: sampling instant and satellites list,
/// in order of appearance. A satellite that could not be identified
/// still occupies its position (its record follows), as None.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochHeader {
    /// Sampling instant
    pub epoch: Epoch,
    /// Epoch flag, always [EpochFlag::Ok] for decoded epochs
    pub flag: EpochFlag,
    /// Satellites, in the order their records appear
    pub satellites: Vec<Option<SV>>,
}

/// Identifies a V2 satellite ("G01", "R 9", " 12").
/// Blank system means the header system, which is
/// not possible in mixed files.
pub(crate) fn resolve_sv(id: &str, constellation: Constellation) -> Option<SV> {
    let mut chars = id.chars();
    let system = chars.next()?;
    let prn = chars.as_str().trim().parse::<u8>().ok()?;
    let constellation = match system {
        // RINEX 2: blank letter is the file system (GPS when undefined)
        ' ' => match constellation {
            Constellation::Mixed => return None,
            constellation => constellation,
        },
        'M' => return None,
        c => Constellation::from_str(&c.to_string()).ok()?,
    };
    Some(SV { prn, constellation })
}

/// Reads next line, or None when the stream is exhausted
/// while looking for an epoch.
fn skip_line<R: BufRead>(
    reader: &mut Reader<R>,
    line: String,
    pattern: &str,
) -> Result<Option<String>, ParsingError> {
    if line.contains(pattern) {
        #[cfg(feature = "log")]
        debug!("line {}: skipped \"{}\"", reader.line_number(), line.trim_end());
        reader.next_line()
    } else {
        Ok(Some(line))
    }
}

/// Consumes next epoch description (epoch line and possible satellite
/// continuation lines). Returns None when the stream is exhausted.
/// Known non data lines that may precede the epoch are skipped.
pub fn next_epoch<R: BufRead>(
    reader: &mut Reader<R>,
    constellation: Constellation,
    ts: TimeScale,
) -> Result<Option<EpochHeader>, ParsingError> {
    let mut line = loop {
        match reader.next_line()? {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
            None => return Ok(None),
        }
    };

    match skip_line(reader, line, ZERO_EPOCH_SENTINEL)? {
        Some(next) => line = next,
        None => return Ok(None),
    }
    match skip_line(reader, line, "MARKER NUMBER")? {
        Some(next) => line = next,
        None => return Ok(None),
    }
    for _ in 0..MAX_INTERLEAVED_COMMENTS {
        match skip_line(reader, line, "COMMENT")? {
            Some(next) => line = next,
            None => return Ok(None),
        }
    }
    match skip_line(reader, line, EVENT_SENTINEL)? {
        Some(next) => line = next,
        None => return Ok(None),
    }

    let epoch = parse_v2_in_timescale(&line, ts)?;

    let flag = column(&line, 28, 29);
    match EpochFlag::from_str(flag) {
        Ok(EpochFlag::Ok) => {},
        _ => return Err(ParsingError::UnsupportedEpochFlag(flag.to_string())),
    }

    let numsat = column(&line, 29, 32);
    let numsat = numsat
        .trim()
        .parse::<usize>()
        .map_err(|_| ParsingError::SatelliteCount(numsat.to_string()))?;

    let mut satellites = Vec::with_capacity(numsat);
    for i in 0..numsat {
        if i > 0 && i % SATELLITES_PER_LINE == 0 {
            line = match reader.next_line()? {
                Some(line) => line,
                None => {
                    #[cfg(feature = "log")]
                    warn!("{}: truncated satellites list", epoch);
                    String::new()
                },
            };
        }
        let start = SATELLITE_LIST_START + (i % SATELLITES_PER_LINE) * SVNN_SIZE;
        let id = column(&line, start, start + SVNN_SIZE);
        let sv = resolve_sv(id, constellation);

        #[cfg(feature = "log")]
        if sv.is_none() {
            warn!("{}: unidentified satellite \"{}\"", epoch, id);
        }

        satellites.push(sv);
    }

    #[cfg(feature = "log")]
    trace!("{}: {} satellites", epoch, satellites.len());

    Ok(Some(EpochHeader {
        epoch,
        flag: EpochFlag::Ok,
        satellites,
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::BufReader;

    fn reader(content: &str) -> Reader<BufReader<&[u8]>> {
        Reader::new(BufReader::new(content.as_bytes()))
    }

    fn sv(constellation: Constellation, prn: u8) -> SV {
        SV { prn, constellation }
    }

    #[test]
    fn satellite_identification() {
        for (id, expected) in [
            ("G01", Some(sv(Constellation::GPS, 1))),
            ("G 1", Some(sv(Constellation::GPS, 1))),
            ("R24", Some(sv(Constellation::Glonass, 24))),
            ("E11", Some(sv(Constellation::Galileo, 11))),
            (" 12", Some(sv(Constellation::GPS, 12))),
            ("G", None),
            ("", None),
            ("GXX", None),
            ("M01", None),
        ] {
            assert_eq!(resolve_sv(id, Constellation::GPS), expected, "\"{}\"", id);
        }
        assert_eq!(
            resolve_sv(" 12", Constellation::Glonass),
            Some(sv(Constellation::Glonass, 12))
        );
        assert_eq!(resolve_sv(" 12", Constellation::Mixed), None);
    }

    #[test]
    fn blank_system_letter() {
        // blank letters inherit the header system, in single system files only
        let line = " 95  1  1  0  0  0.0000000  0  3 05G06 07\n";
        for (constellation, expected) in [
            (
                Constellation::GPS,
                vec![
                    Some(sv(Constellation::GPS, 5)),
                    Some(sv(Constellation::GPS, 6)),
                    Some(sv(Constellation::GPS, 7)),
                ],
            ),
            (
                Constellation::Glonass,
                vec![
                    Some(sv(Constellation::Glonass, 5)),
                    Some(sv(Constellation::GPS, 6)),
                    Some(sv(Constellation::Glonass, 7)),
                ],
            ),
            (
                Constellation::Mixed,
                vec![None, Some(sv(Constellation::GPS, 6)), None],
            ),
        ] {
            let mut reader = reader(line);
            let epoch = next_epoch(&mut reader, constellation, TimeScale::GPST)
                .unwrap()
                .unwrap();
            assert_eq!(epoch.satellites, expected, "{:?} header", constellation);
        }
    }

    #[test]
    fn single_line_epoch() {
        let mut reader =
            reader(" 21 12 21  0  0 30.0000000  0  3G07G08R24\n  20891534.648\n");
        let epoch = next_epoch(&mut reader, Constellation::Mixed, TimeScale::GPST)
            .unwrap()
            .unwrap();
        assert_eq!(
            epoch.epoch,
            Epoch::from_gregorian(2021, 12, 21, 0, 0, 30, 0, TimeScale::GPST)
        );
        assert_eq!(epoch.flag, EpochFlag::Ok);
        assert_eq!(
            epoch.satellites,
            vec![
                Some(sv(Constellation::GPS, 7)),
                Some(sv(Constellation::GPS, 8)),
                Some(sv(Constellation::Glonass, 24)),
            ]
        );
        assert_eq!(reader.line_number(), 1);
    }

    #[test]
    fn satellites_continuation() {
        let mut reader = reader(
            " 05  3 14 12  0  0.0000000  0 13G01G02G03G04G05G06G07G08G09G10G11G12
                                G13
  20891534.648",
        );
        let epoch = next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST)
            .unwrap()
            .unwrap();
        assert_eq!(
            epoch.epoch,
            Epoch::from_gregorian(2005, 3, 14, 12, 0, 0, 0, TimeScale::GPST)
        );
        assert_eq!(epoch.satellites.len(), 13);
        for (i, sat) in epoch.satellites.iter().enumerate() {
            assert_eq!(*sat, Some(sv(Constellation::GPS, i as u8 + 1)));
        }
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn interleaved_lines() {
        let mut reader = reader(
            "                            4  2
ROVER                                                       MARKER NAME
1234                                                        MARKER NUMBER
first comment                                               COMMENT
second comment                                              COMMENT
 95  1  1 11  0  0.1234567  0  1G05",
        );
        // "4  2" event is not a known sentinel: it is interpreted as an epoch
        assert!(next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST).is_err());

        let mut reader = reader(
            "1234                                                        MARKER NUMBER
first comment                                               COMMENT
second comment                                              COMMENT
 95  1  1 11  0  0.1234567  0  1G05",
        );
        let epoch = next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST)
            .unwrap()
            .unwrap();
        assert_eq!(
            epoch.epoch,
            Epoch::from_gregorian(1995, 1, 1, 11, 0, 0, 123_456_000, TimeScale::GPST)
        );
        assert_eq!(epoch.satellites, vec![Some(sv(Constellation::GPS, 5))]);
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn zero_epoch_sentinel() {
        let mut reader = reader(
            "  0  0  0  0  0  0.0000000  4  5
                            4  1
 99 12 31 23 59 59.0000000  0  1R01",
        );
        let epoch = next_epoch(&mut reader, Constellation::Glonass, TimeScale::UTC)
            .unwrap()
            .unwrap();
        assert_eq!(
            epoch.epoch,
            Epoch::from_gregorian(1999, 12, 31, 23, 59, 59, 0, TimeScale::UTC)
        );
        assert_eq!(epoch.satellites, vec![Some(sv(Constellation::Glonass, 1))]);
    }

    #[test]
    fn end_of_stream() {
        let mut reader = reader("");
        assert!(next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST)
            .unwrap()
            .is_none());

        let mut reader = reader("\n   \n");
        assert!(next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST)
            .unwrap()
            .is_none());

        let mut reader = reader("last comment                                                COMMENT");
        assert!(next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST)
            .unwrap()
            .is_none());
    }

    #[test]
    fn unsupported_flag() {
        let mut reader = reader(" 21 12 21  0  0 30.0000000  1  1G01");
        match next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST) {
            Err(ParsingError::UnsupportedEpochFlag(flag)) => assert_eq!(flag, "1"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_epochs() {
        let mut reader = reader(" 21 13 21  0  0 30.0000000  0  1G01");
        assert!(matches!(
            next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST),
            Err(ParsingError::EpochTimestamp(_))
        ));
        let mut reader = reader(" 21 12 21  0  0 30.0000000  0  xG01");
        assert!(matches!(
            next_epoch(&mut reader, Constellation::GPS, TimeScale::GPST),
            Err(ParsingError::SatelliteCount(_))
        ));
    }
}

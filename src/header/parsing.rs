//! Header section parser
use std::{io::BufRead, str::FromStr};

use hifitime::{Duration, Epoch, TimeScale};

use crate::{
    columns::{column, column_char, pad},
    constants::{HEADER_LINE_WIDTH, LABEL_START, OBSERVABLES_PER_HEADER_LINE},
    error::ParsingError,
    hardware::{Antenna, Receiver},
    header::{default_timescale, system_constellation, Header, Label, UNKNOWN_MARKER},
    observable::Observable,
    reader::Reader,
    types::Type,
    version::Version,
};

#[cfg(feature = "log")]
use log::{debug, warn};

/// Gregorian decomposition of TIME OF FIRST/LAST OBS,
/// until we know in which time scale it should be expressed.
type GregorianTime = (i32, u8, u8, u8, u8, u8, u32);

impl Header {
    /// Parse [Header] by consuming [Reader] until end of this section.
    /// Nothing past the END OF HEADER line is consumed.
    pub fn parse<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, ParsingError> {
        let line = reader.next_line()?.ok_or(ParsingError::TruncatedHeader)?;
        let line = pad(&line, HEADER_LINE_WIDTH);

        let version_str = column(&line, 0, 9).trim();
        let version = Version::from_str(version_str)?;
        if !version.is_supported() {
            return Err(ParsingError::UnsupportedVersion(version_str.to_string()));
        }

        let code = column_char(&line, 20).unwrap_or(' ');
        let rinex_type = Type::try_from(code)?;
        if rinex_type != Type::ObservationData {
            return Err(ParsingError::UnsupportedFileType(code));
        }

        let system = column_char(&line, 40).unwrap_or(' ');
        let constellation =
            system_constellation(system).ok_or(ParsingError::UnsupportedSatelliteSystem(system))?;

        let mut header = Header {
            version,
            rinex_type,
            constellation,
            ..Default::default()
        };

        // remaining # of observables to be declared
        let mut num_obs = Option::<usize>::None;

        let mut first_obs = Option::<(GregorianTime, Option<TimeScale>)>::None;
        let mut last_obs = Option::<GregorianTime>::None;

        loop {
            let line = match reader.next_line()? {
                Some(line) => pad(&line, HEADER_LINE_WIDTH),
                None => return Err(ParsingError::TruncatedHeader),
            };

            let content = column(&line, 0, LABEL_START);
            let label = column(&line, LABEL_START, HEADER_LINE_WIDTH);

            match Label::classify(label) {
                Label::EndOfHeader => break,
                Label::VersionType | Label::Other => {},
                Label::Comment => {
                    header.comments.push(content.trim_end().to_string());
                },
                Label::MarkerName => {
                    let name = content.trim();
                    header.marker_name = if name.is_empty() {
                        UNKNOWN_MARKER.to_string()
                    } else {
                        name.to_string()
                    };
                },
                Label::MarkerNumber => {
                    header.marker_number = non_empty(column(content, 0, 20));
                },
                Label::ObserverAgency => {
                    header.observer = non_empty(column(content, 0, 20));
                    header.agency = non_empty(column(content, 20, 60));
                },
                Label::ProgramRunByDate => {
                    header.program = non_empty(column(content, 0, 20));
                    header.run_by = non_empty(column(content, 20, 40));
                    header.date = non_empty(column(content, 40, 60));
                },
                Label::Receiver => {
                    header.rcvr = Some(Receiver::parse(content));
                },
                Label::Antenna => {
                    header.rcvr_antenna = Some(Antenna::parse(content));
                },
                Label::ApproxPosition => {
                    header.rx_position = parse_triplet(content);
                },
                Label::AntennaDeltaHen => {
                    header.antenna_delta = parse_triplet(content);
                },
                Label::Interval => {
                    if let Ok(interval) = column(content, 0, 10).trim().parse::<f64>() {
                        if interval > 0.0 {
                            header.sampling_interval = Some(Duration::from_seconds(interval));
                        }
                    }
                },
                Label::TimeOfFirstObs => {
                    first_obs = parse_time_of_obs(content);
                },
                Label::TimeOfLastObs => {
                    last_obs = parse_time_of_obs(content).map(|(t, _)| t);
                },
                Label::TypesOfObserv => {
                    parse_v2_observables(content, &mut num_obs, &mut header.observables);
                },
            }
        }

        header.timescale = match first_obs {
            Some((_, Some(ts))) => ts,
            _ => default_timescale(header.constellation),
        };

        let ts = header.timescale;
        header.time_of_first_obs = first_obs.and_then(|(t, _)| gregorian_epoch(t, ts));
        header.time_of_last_obs = last_obs.and_then(|t| gregorian_epoch(t, ts));

        #[cfg(feature = "log")]
        debug!(
            "header: v{} {:?} \"{}\" {} observables ({:?})",
            header.version,
            header.constellation,
            header.marker_name,
            header.observables.len(),
            header.timescale,
        );

        Ok(header)
    }
}

fn non_empty(field: &str) -> Option<String> {
    let field = field.trim();
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Parses 3F14.4 content (coordinates, eccentricities)
fn parse_triplet(content: &str) -> Option<(f64, f64, f64)> {
    let x = column(content, 0, 14).trim().parse::<f64>().ok()?;
    let y = column(content, 14, 28).trim().parse::<f64>().ok()?;
    let z = column(content, 28, 42).trim().parse::<f64>().ok()?;
    Some((x, y, z))
}

/// Parses `# / TYPES OF OBSERV` content. Count field is only present on
/// the first line; when more than 9 observables are declared, the
/// following lines carry the remainder.
fn parse_v2_observables(
    content: &str,
    num_obs: &mut Option<usize>,
    observables: &mut Vec<Observable>,
) {
    if let Ok(declared) = column(content, 0, 6).trim().parse::<usize>() {
        *num_obs = Some(declared);
        observables.clear();
    }

    let remaining = match num_obs {
        Some(remaining) => *remaining,
        None => {
            #[cfg(feature = "log")]
            warn!("observables continuation without declared count: \"{}\"", content);
            return;
        },
    };

    let count = remaining.min(OBSERVABLES_PER_HEADER_LINE);
    for i in 0..count {
        let start = 10 + 6 * i;
        observables.push(Observable::new(column(content, start, start + 2)));
    }
    *num_obs = Some(remaining - count);
}

/// Parses TIME OF FIRST/LAST OBS content (5I6, F13.7, 5X, A3)
fn parse_time_of_obs(content: &str) -> Option<(GregorianTime, Option<TimeScale>)> {
    let y = column(content, 0, 6).trim().parse::<i32>().ok()?;
    let m = column(content, 6, 12).trim().parse::<u8>().ok()?;
    let d = column(content, 12, 18).trim().parse::<u8>().ok()?;
    let hh = column(content, 18, 24).trim().parse::<u8>().ok()?;
    let mm = column(content, 24, 30).trim().parse::<u8>().ok()?;
    let secs = column(content, 30, 43).trim().parse::<f64>().ok()?;
    if !(0.0..61.0).contains(&secs) {
        return None;
    }
    let ss = secs.trunc();
    let ns = ((secs - ss) * 1.0E9).round().min(999_999_999.0) as u32;

    let ts = match column(content, 48, 51).trim() {
        "GPS" => Some(TimeScale::GPST),
        "GLO" => Some(TimeScale::UTC),
        "GAL" => Some(TimeScale::GST),
        _ => None,
    };

    Some(((y, m, d, hh, mm, ss as u8, ns), ts))
}

fn gregorian_epoch(t: GregorianTime, ts: TimeScale) -> Option<Epoch> {
    let (y, m, d, hh, mm, ss, ns) = t;
    Epoch::maybe_from_gregorian(y, m, d, hh, mm, ss, ns, ts).ok()
}

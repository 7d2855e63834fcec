//! Satellite records decoder
use std::io::BufRead;

use crate::{
    columns::{column, pad_record},
    constants::{OBSERVATIONS_PER_LINE, OBSERVATION_F14_WIDTH, OBSERVATION_WIDTH},
    error::ParsingError,
    observation::ObservationData,
    reader::Reader,
    slot::Slot,
};

#[cfg(feature = "log")]
use log::warn;

/// Decodes one indicator digit (LLI or SSI), blank means 0.
fn parse_indicator(field: &str, line: usize) -> Result<u8, ParsingError> {
    match field.chars().next() {
        None | Some(' ') => Ok(0),
        Some(c) => c
            .to_digit(10)
            .map(|d| d as u8)
            .ok_or_else(|| ParsingError::MalformedObservation {
                line,
                field: field.to_string(),
            }),
    }
}

/// Decodes a 16 column observation field.
/// An empty value, or a value whose last column is blank, is not
/// an observation. `line` is only used for error reporting.
pub(crate) fn parse_observation_field(
    field: &str,
    line: usize,
) -> Result<ObservationData, ParsingError> {
    let content = column(field, 0, OBSERVATION_F14_WIDTH);
    let value = if content.is_empty() || content.ends_with(' ') {
        None
    } else {
        let value = content
            .trim()
            .parse::<f64>()
            .map_err(|_| ParsingError::MalformedObservation {
                line,
                field: content.to_string(),
            })?;
        Some(value)
    };

    let lli = parse_indicator(
        column(field, OBSERVATION_F14_WIDTH, OBSERVATION_F14_WIDTH + 1),
        line,
    )?;
    let ssi = parse_indicator(
        column(field, OBSERVATION_F14_WIDTH + 1, OBSERVATION_WIDTH),
        line,
    )?;

    Ok(ObservationData { value, lli, ssi })
}

/// Consumes the records of every satellite of one epoch.
/// Each satellite spans ceil(num_obs / 5) lines, that we join into
/// a single record. Decoded data is stored in `row`
/// (num_obs entries per slot); satellites without slot are decoded
/// but discarded.
pub(crate) fn read_satellite_records<R: BufRead>(
    reader: &mut Reader<R>,
    slots: &[Option<Slot>],
    num_obs: usize,
    row: &mut [ObservationData],
) -> Result<(), ParsingError> {
    let num_lines = num_integer::div_ceil(num_obs, OBSERVATIONS_PER_LINE);
    let mut record = String::with_capacity(num_lines * 80);

    for slot in slots {
        record.clear();
        let mut first_line = reader.line_number() + 1;

        for nth in 0..num_lines {
            match reader.next_line()? {
                Some(line) => {
                    if nth == 0 {
                        first_line = reader.line_number();
                    }
                    record.push_str(&pad_record(&line));
                },
                None => {
                    #[cfg(feature = "log")]
                    warn!("line {}: truncated satellite record", reader.line_number());
                    record.push_str(&pad_record(""));
                },
            }
        }

        let mut decoded = Vec::with_capacity(num_obs);
        for j in 0..num_obs {
            let start = j * OBSERVATION_WIDTH;
            let field = column(&record, start, start + OBSERVATION_WIDTH);
            let line = first_line + start / (OBSERVATIONS_PER_LINE * OBSERVATION_WIDTH);
            decoded.push(parse_observation_field(field, line)?);
        }

        if let Some(slot) = slot {
            let offset = slot.0 * num_obs;
            if let Some(dest) = row.get_mut(offset..offset + num_obs) {
                dest.copy_from_slice(&decoded);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::BufReader;

    #[test]
    fn observation_fields() {
        for (field, expected) in [
            (
                "  23629347.915  ",
                ObservationData {
                    value: Some(23629347.915),
                    lli: 0,
                    ssi: 0,
                },
            ),
            (
                "     -1219.162",
                ObservationData {
                    value: Some(-1219.162),
                    lli: 0,
                    ssi: 0,
                },
            ),
            (
                "         0.000",
                ObservationData {
                    value: Some(0.0),
                    lli: 0,
                    ssi: 0,
                },
            ),
            (
                " 123456789.12354",
                ObservationData {
                    value: Some(123456789.123),
                    lli: 5,
                    ssi: 4,
                },
            ),
            (
                "                ",
                ObservationData::default(),
            ),
            ("", ObservationData::default()),
            (
                "     12.5       ",
                ObservationData::default(),
            ),
            (
                "123456789.123 5",
                ObservationData {
                    value: None,
                    lli: 5,
                    ssi: 0,
                },
            ),
            (
                "              18",
                ObservationData {
                    value: None,
                    lli: 1,
                    ssi: 8,
                },
            ),
        ] {
            let decoded = parse_observation_field(field, 1).unwrap();
            assert_eq!(decoded, expected, "failed to decode \"{}\"", field);
        }
    }

    #[test]
    fn missing_is_not_zero() {
        let zero = parse_observation_field("         0.000  ", 1).unwrap();
        let missing = parse_observation_field("                ", 1).unwrap();
        assert_eq!(zero.value, Some(0.0));
        assert_eq!(missing.value, None);
        assert_ne!(zero, missing);
    }

    #[test]
    fn malformed_fields() {
        match parse_observation_field("  23629347.9A5  ", 12) {
            Err(ParsingError::MalformedObservation { line, field }) => {
                assert_eq!(line, 12);
                assert_eq!(field, "  23629347.9A5");
            },
            other => panic!("unexpected result {:?}", other),
        }
        assert!(parse_observation_field("  23629347.915x ", 1).is_err());
        assert!(parse_observation_field("  23629347.915 x", 1).is_err());
    }

    #[test]
    fn satellite_records() {
        // 7 observables: two lines per satellite, 2nd vehicle has no slot
        let content = [
            "  23629347.915    23629347.158       24652.879         -14.700   124169430.62616",
            "  96753615.384 4        43.000",
            "  20891534.6481   20891533.124",
            "",
            "  21234567.89012  21234566.21012     12345.678          -1.300   111587765.43218",
            "  86950123.123 8        38.000",
        ]
        .join("\n");
        let slots = [Some(Slot(0)), None, Some(Slot(2))];
        let mut row = vec![ObservationData::default(); 3 * 7];
        let mut reader = Reader::new(BufReader::new(content.as_bytes()));
        read_satellite_records(&mut reader, &slots, 7, &mut row).unwrap();
        assert_eq!(reader.line_number(), 6);

        // first satellite
        assert_eq!(row[0].value, Some(23629347.915));
        assert_eq!(row[1].value, Some(23629347.158));
        assert_eq!(row[2].value, Some(24652.879));
        assert_eq!(row[3].value, Some(-14.7));
        assert_eq!(row[4], ObservationData::new(124169430.626).with_lli(1).with_ssi(6));
        assert_eq!(row[5], ObservationData::new(96753615.384).with_ssi(4));
        assert_eq!(row[6].value, Some(43.0));

        // slot 1 untouched
        assert!(row[7..14].iter().all(|obs| obs.is_missing()));

        // third satellite
        assert_eq!(row[14], ObservationData::new(21234567.890).with_lli(1).with_ssi(2));
        assert_eq!(row[15], ObservationData::new(21234566.210).with_lli(1).with_ssi(2));
        assert_eq!(row[16].value, Some(12345.678));
        assert_eq!(row[17].value, Some(-1.3));
        assert_eq!(row[18], ObservationData::new(111587765.432).with_lli(1).with_ssi(8));
        assert_eq!(row[19], ObservationData::new(86950123.123).with_ssi(8));
        assert_eq!(row[20].value, Some(38.0));
    }

    #[test]
    fn malformed_record_line() {
        let content = "  20891534.648    20891533.124  \n  2089153#.648    20891533.124  \n";
        let mut reader = Reader::new(BufReader::new(content.as_bytes()));
        let mut row = vec![ObservationData::default(); 2 * 2];
        match read_satellite_records(&mut reader, &[Some(Slot(0)), Some(Slot(1))], 2, &mut row) {
            Err(ParsingError::MalformedObservation { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn truncated_records() {
        let content = "  20891534.648    20891533.124  \n";
        let mut reader = Reader::new(BufReader::new(content.as_bytes()));
        let mut row = vec![ObservationData::default(); 2 * 2];
        read_satellite_records(&mut reader, &[Some(Slot(0)), Some(Slot(1))], 2, &mut row)
            .unwrap();
        assert_eq!(row[0].value, Some(20891534.648));
        assert!(row[2].is_missing());
        assert!(row[3].is_missing());
    }
}

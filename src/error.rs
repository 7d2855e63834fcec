use std::path::PathBuf;
use thiserror::Error;

/// Errors that may rise in Parsing process.
/// Every one of them aborts the parsing process.
#[derive(Error, Debug)]
pub enum ParsingError {
    /// Line could not be read from the input stream
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Version field is not a decimal number
    #[error("invalid revision field \"{0}\"")]
    VersionParsing(String),
    /// Only RINEX <= 2.11 are supported
    #[error("rinex revision {0} is not supported")]
    UnsupportedVersion(String),
    /// File type code (column 20) is not 'O': either a known RINEX
    /// document kind other than Observation Data, or an unknown code.
    #[error("file type '{0}' is not supported: only observation data is")]
    UnsupportedFileType(char),
    /// Satellite system code is not one of G, R, S, E, M (or blank)
    #[error("satellite system '{0}' is not supported")]
    UnsupportedSatelliteSystem(char),
    /// Input ended before the END OF HEADER label
    #[error("header section is truncated (END OF HEADER not found)")]
    TruncatedHeader,
    /// Only "0" (OK) epochs are decoded
    #[error("unsupported epoch flag \"{0}\"")]
    UnsupportedEpochFlag(String),
    /// Date and time fields of an epoch line
    #[error("invalid epoch timestamp \"{0}\"")]
    EpochTimestamp(String),
    /// Number of satellites of an epoch line
    #[error("invalid number of satellites \"{0}\"")]
    SatelliteCount(String),
    /// Observation field that is neither numerical nor blank
    #[error("line {line}: malformed observation \"{field}\"")]
    MalformedObservation { line: usize, field: String },
}

/// [crate::Rinex] related errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Input stream could not be opened (missing file, not a file..).
    /// This is reported before any content was interpreted.
    #[error("failed to open \"{path}\": {source}")]
    StreamUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input was opened but its content is invalid
    #[error("parsing error: {0}")]
    Parsing(#[from] ParsingError),
}

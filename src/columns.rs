//! Fixed width (column based) helpers.
//! RINEX V2 fields are located by their column offsets,
//! and lines may be shorter than their nominal width.
use crate::constants::{MIN_RECORD_WIDTH, OBSERVATION_WIDTH};

/// Returns the [start, end[ columns of this line.
/// Columns past the end of line are simply omitted.
pub(crate) fn column(line: &str, start: usize, end: usize) -> &str {
    if line.is_ascii() {
        let len = line.len();
        return &line[start.min(len)..end.min(len)];
    }
    let offset = |col: usize| {
        line.char_indices()
            .nth(col)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len())
    };
    let (start, end) = (offset(start), offset(end));
    if start < end {
        &line[start..end]
    } else {
        ""
    }
}

/// Returns character at given column, if it exists.
pub(crate) fn column_char(line: &str, col: usize) -> Option<char> {
    if line.is_ascii() {
        line.as_bytes().get(col).map(|b| *b as char)
    } else {
        line.chars().nth(col)
    }
}

/// Right pads this line with whitespaces, up to `width` columns.
pub(crate) fn pad(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let mut padded = String::with_capacity(width.max(len));
    padded.push_str(line);
    for _ in len..width {
        padded.push(' ');
    }
    padded
}

/// Right pads an observation line to the next 16 column boundary,
/// then keeps adding 16 columns until it is at least 70 columns wide.
pub(crate) fn pad_record(line: &str) -> String {
    let len = line.chars().count();
    let mut width = OBSERVATION_WIDTH * ((len + OBSERVATION_WIDTH - 1) / OBSERVATION_WIDTH);
    while width < MIN_RECORD_WIDTH {
        width += OBSERVATION_WIDTH;
    }
    pad(line, width)
}

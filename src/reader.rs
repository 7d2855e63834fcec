//! Line source, for efficient data reading.
use std::io::BufRead;

use crate::error::ParsingError;

// RINEX is \n termination based, and always made of rather short lines (about 80 bytes).
// 128 is more than enough and avoids reallocations of the internal buffer.
const LINE_CAPACITY: usize = 128;

/// [Reader] is the line source of the RINEX decoder.
/// It pulls one line at a time from any [BufRead]able interface,
/// and keeps track of how many lines were consumed,
/// which is reported in case of malformed content.
/// Lines are returned without their \n (or \r\n) termination.
pub struct Reader<R: BufRead> {
    reader: R,
    buf: String,
    line_number: usize,
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: String::with_capacity(LINE_CAPACITY),
        }
    }

    /// Returns next line, or None once the stream is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>, ParsingError> {
        self.buf.clear();
        let size = self.reader.read_line(&mut self.buf)?;
        if size == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(Some(self.buf.clone()))
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Releases the underlying interface
    pub fn into_inner(self) -> R {
        self.reader
    }
}

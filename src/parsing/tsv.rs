use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::field::Field;
use crate::core::record::Record;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed reading header line: input is empty")]
    MissingHeader,
}

/// Open a TSV file for line reading, decompressing it when `gzipped` is set.
///
/// Every member of a multi-member (or bgzip) gzip stream is read.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened.
pub fn open(path: &Path, gzipped: bool) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Strip surrounding double quotes, then surrounding whitespace.
///
/// Some HGNC cells are quoted, others padded with spaces.
#[must_use]
pub fn clean_cell(raw: &str) -> &str {
    raw.trim_matches('"').trim()
}

/// Column position -> catalog field, derived from the header line
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: Vec<Option<Field>>,
}

impl HeaderMap {
    /// Map each tab-separated header name onto the field catalog.
    ///
    /// Names are matched exactly, without quote or whitespace cleanup.
    /// Unknown names are ignored. If a name repeats, its last column wins.
    pub fn parse(line: &str) -> Self {
        let mut columns: Vec<Option<Field>> = Vec::new();

        for name in line.split('\t') {
            match name.parse::<Field>() {
                Ok(field) => {
                    if let Some(earlier) = columns.iter_mut().find(|c| **c == Some(field)) {
                        *earlier = None;
                    }
                    columns.push(Some(field));
                }
                Err(_) => {
                    debug!("Ignoring unknown header column '{name}'");
                    columns.push(None);
                }
            }
        }

        Self { columns }
    }

    /// Number of columns in the header, recognised or not
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Catalog fields present in the header, in column order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.columns.iter().flatten().copied()
    }

    /// Build a record from one data line.
    ///
    /// Cells beyond the end of a short line are left empty.
    pub fn parse_record(&self, line: &str) -> Record {
        let mut record = Record::empty();
        for (column, cell) in self.columns.iter().zip(line.split('\t')) {
            if let Some(field) = column {
                record.set(*field, clean_cell(cell).to_string());
            }
        }
        record
    }
}

/// Read one line into `buf` without its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of input. Bytes that are not valid UTF-8 are
/// replaced rather than failing the read.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    match String::from_utf8_lossy(buf) {
        std::borrow::Cow::Borrowed(line) => Ok(Some(line.to_string())),
        std::borrow::Cow::Owned(line) => {
            debug!("Replaced invalid UTF-8 in line: {line}");
            Ok(Some(line))
        }
    }
}

/// Streams records out of an HGNC TSV source
pub struct RecordReader<R> {
    header: HeaderMap,
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    /// Read the header line and prepare to stream data rows
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingHeader` if the input has no lines, or
    /// `ParseError::Io` if reading fails.
    pub fn new(mut reader: R) -> Result<Self, ParseError> {
        let mut buf = Vec::new();
        let header_line = read_line(&mut reader, &mut buf)?.ok_or(ParseError::MissingHeader)?;
        Ok(Self {
            header: HeaderMap::parse(&header_line),
            reader,
            buf,
        })
    }

    pub fn header(&self) -> &HeaderMap {
        &self.header
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match read_line(&mut self.reader, &mut self.buf) {
            Ok(Some(line)) => Some(Ok(self.header.parse_record(&line))),
            Ok(None) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

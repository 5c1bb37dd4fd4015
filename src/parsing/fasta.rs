//! Line-preserving FASTA record parser.
//!
//! Splits a FASTA file into [`FastaRecord`]s without touching the sequence
//! content, so records can be written back out exactly as they were read.
//! Body lines that appear before the first header are discarded.
//!
//! Supported inputs:
//! - `.fa`, `.fasta`, `.faa`, `.fna` and anything else (read as plain text)
//! - `.gz`, `.bgz` (gzip / bgzip compressed)
//! - `-` (standard input)

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::record::{is_header_line, FastaRecord};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Streaming iterator over the records of a FASTA source
///
/// Each item is one record; an I/O error ends the iteration after it is
/// yielded.
pub struct FastaRecords<R> {
    lines: Lines<R>,
    pending_header: Option<String>,
    done: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending_header: None,
            done: false,
        }
    }

    fn next_line(&mut self) -> Option<io::Result<String>> {
        let line = self.lines.next();
        if matches!(line, None | Some(Err(_))) {
            self.done = true;
        }
        line
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<FastaRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done && self.pending_header.is_none() {
            return None;
        }

        // Only the first call can get here without a pending header; skip
        // any body lines that precede the first record.
        let header = match self.pending_header.take() {
            Some(header) => header,
            None => loop {
                match self.next_line()? {
                    Ok(line) if is_header_line(&line) => break line,
                    Ok(_) => {}
                    Err(e) => return Some(Err(e.into())),
                }
            },
        };

        let mut sequence = String::new();
        while !self.done {
            match self.next_line() {
                Some(Ok(line)) if is_header_line(&line) => {
                    self.pending_header = Some(line);
                    break;
                }
                Some(Ok(line)) => {
                    sequence.push_str(&line);
                    sequence.push('\n');
                }
                Some(Err(e)) => return Some(Err(e.into())),
                None => {}
            }
        }

        let mut header = header;
        header.push('\n');
        Some(Ok(FastaRecord::new(header, sequence)))
    }
}

/// Parse all records from a buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, including when the content is
/// not valid UTF-8.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, ParseError> {
    FastaRecords::new(reader).collect()
}

/// Parse FASTA records from text
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-based parsers.
pub fn parse_fasta_text(text: &str) -> Result<Vec<FastaRecord>, ParseError> {
    parse_fasta_reader(text.as_bytes())
}

/// Parse a FASTA file into records, reading the whole file
///
/// The file handle is closed on every return path.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<FastaRecord>, ParseError> {
    let records = if is_stdin(path) {
        parse_fasta_reader(io::stdin().lock())?
    } else if is_gzipped(path) {
        let file = File::open(path)?;
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        let file = File::open(path)?;
        parse_fasta_reader(BufReader::new(file))?
    };

    debug!(
        path = %path.display(),
        records = records.len(),
        "Parsed FASTA input"
    );
    Ok(records)
}

/// Marker that opens a FASTA header line
pub const HEADER_MARKER: char = '>';

/// A single FASTA entry, kept as the text it was read from
///
/// `header` is the full header line including the leading `>` and its line
/// terminator. `sequence` is every following body line, each terminated,
/// up to the next header or end of input. It may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    #[must_use]
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Header text without the leading `>` and trailing line terminator
    #[must_use]
    pub fn header_text(&self) -> &str {
        header_text(&self.header)
    }

    /// True when the record has no body lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The record as it is written back out: header followed by sequence block
    #[must_use]
    pub fn to_fasta_string(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + self.sequence.len());
        out.push_str(&self.header);
        out.push_str(&self.sequence);
        out
    }
}

/// Check if a line opens a new record
#[must_use]
pub fn is_header_line(line: &str) -> bool {
    line.starts_with(HEADER_MARKER)
}

/// Strip the leading `>` and any trailing `\n` / `\r\n` from a raw header line
#[must_use]
pub fn header_text(header: &str) -> &str {
    let trimmed = header.trim_end_matches(['\n', '\r']);
    trimmed.strip_prefix(HEADER_MARKER).unwrap_or(trimmed)
}

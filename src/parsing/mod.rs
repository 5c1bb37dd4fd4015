//! Parsers for reading FASTA databases into records.
//!
//! ## Example
//!
//! ```rust
//! use validate_fasta::parsing::fasta::parse_fasta_text;
//!
//! let records = parse_fasta_text(">sp|P12345|NAME_HUMAN\nMSEQ\n>bad header\nMORE\n").unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sequence, "MSEQ\n");
//! ```

pub mod fasta;

//! # validate-fasta
//!
//! A library for sorting FASTA database entries by whether their header follows
//! the naming convention of a known sequence database.
//!
//! Protein search engines and other downstream tools expect FASTA headers laid
//! out the way UniProt, NCBI, Ensembl and friends lay them out. Databases
//! assembled from several sources often contain entries that don't. This crate
//! reads a FASTA file, checks every header against an ordered list of known
//! conventions, and separates well-formed entries from malformed ones without
//! altering a single byte of either.
//!
//! ## Features
//!
//! - **Verbatim records**: Headers and sequence blocks are kept exactly as read
//! - **Ordered conventions**: The first convention that accepts a header decides its type
//! - **Database tally**: Counts of each database type among well-formed entries
//! - **Strict mode**: Optionally stop at the first malformed header
//!
//! ## Example
//!
//! ```rust
//! use validate_fasta::{DatabaseType, FastaCatalog};
//! use validate_fasta::parsing::fasta::parse_fasta_text;
//!
//! let text = ">sp|P12345|NAME_HUMAN desc\nMSEQ\n>bad header\nMORE\n";
//! let catalog = FastaCatalog::build(parse_fasta_text(text).unwrap(), false).unwrap();
//!
//! for record in catalog.bad() {
//!     println!("malformed: {}", record.header_text());
//! }
//! assert_eq!(catalog.database_counts()[&DatabaseType::UniProt], 1);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Partitioned in-memory model and output writer
//! - [`core`]: Record and database type definitions
//! - [`matching`]: Header classification against naming conventions
//! - [`parsing`]: Line-preserving FASTA parser
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, FastaCatalog};
pub use core::record::FastaRecord;
pub use core::types::*;
pub use matching::classifier::HeaderClassifier;
pub use parsing::fasta::ParseError;

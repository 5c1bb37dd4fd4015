//! In-memory model of a classified FASTA database.
//!
//! [`FastaCatalog`] holds every record of the input in file order and splits
//! it into well-formed entries (header follows a known database convention)
//! and malformed entries, counting how often each database type was seen.
//! The [`writer`] module writes both partitions back out unchanged.
//!
//! ## Example
//!
//! ```rust
//! use validate_fasta::catalog::FastaCatalog;
//! use validate_fasta::parsing::fasta::parse_fasta_text;
//! use validate_fasta::DatabaseType;
//!
//! let records = parse_fasta_text(">sp|P12345|NAME_HUMAN desc\nMSEQ\n>bad header\nMORE\n").unwrap();
//! let catalog = FastaCatalog::build(records, false).unwrap();
//!
//! assert_eq!(catalog.good_count(), 1);
//! assert_eq!(catalog.bad_count(), 1);
//! assert_eq!(catalog.database_counts()[&DatabaseType::UniProt], 1);
//! ```
//!
//! With `crash_on_invalid` set, building stops at the first malformed header
//! and returns [`CatalogError::InvalidHeader`]; callers decide how to exit.

pub mod store;
pub mod writer;

pub use store::{CatalogError, FastaCatalog};

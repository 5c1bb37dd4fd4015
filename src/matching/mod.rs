//! Header classification against known database naming conventions.
//!
//! - [`HeaderClassifier`]: Tries an ordered list of conventions; first match wins
//! - [`ConventionMatcher`]: One convention, pairing a [`DatabaseType`] with its syntax check
//!
//! ## Example
//!
//! ```rust
//! use validate_fasta::matching::HeaderClassifier;
//! use validate_fasta::{ConventionMatch, DatabaseType};
//!
//! let classifier = HeaderClassifier::new();
//! assert_eq!(
//!     classifier.classify(">sp|P12345|NAME_HUMAN Some protein\n"),
//!     ConventionMatch::Matched(DatabaseType::UniProt)
//! );
//! assert_eq!(classifier.classify(">bad header\n"), ConventionMatch::NoMatch);
//! ```
//!
//! [`DatabaseType`]: crate::core::types::DatabaseType

pub mod classifier;
pub mod conventions;

pub use classifier::HeaderClassifier;
pub use conventions::ConventionMatcher;

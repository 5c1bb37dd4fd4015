//! Core data types for FASTA header validation.
//!
//! - [`FastaRecord`]: A header line and its sequence block, kept verbatim
//! - [`DatabaseType`]: The sequence database whose naming convention a header follows
//! - [`ConventionMatch`]: Result of classifying one header
//!
//! ## Header Conventions
//!
//! Different sequence databases lay out FASTA headers differently:
//!
//! | Database | Example header |
//! |----------|----------------|
//! | UniProt  | `>sp\|P12345\|NAME_HUMAN Description OS=...` |
//! | NCBI     | `>gi\|4501847\|ref\|NP_001605.1\| description` |
//! | IPI      | `>IPI:IPI00000001.2\|SWISS-PROT:O95793-1\|...` |
//! | Ensembl  | `>ENSP00000354587.3 pep chromosome:...` |

pub mod record;
pub mod types;

pub use record::FastaRecord;
pub use types::{ConventionMatch, DatabaseType};

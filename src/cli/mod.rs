//! Command-line interface for validate-fasta.
//!
//! Reads a FASTA database, writes entries with recognised headers to one file
//! and the rest to another, then prints how many entries each database
//! naming convention accounted for.
//!
//! ## Usage
//!
//! ```text
//! # Split a database, tolerating malformed headers
//! validate-fasta proteins.fasta good.fasta bad.fasta
//!
//! # Exit with status 1 as soon as a malformed header is found
//! validate-fasta proteins.fasta good.fasta bad.fasta true
//!
//! # Compressed input, JSON report
//! validate-fasta proteins.fasta.gz good.fasta bad.fasta --format json
//! ```

use clap::Parser;

pub mod validate;

#[derive(Parser)]
#[command(name = "validate-fasta")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Split a FASTA database into well-formed and malformed entries")]
#[command(
    long_about = "validate-fasta checks every FASTA header against the naming conventions of known sequence databases (UniProt, NCBI, IPI, Ensembl, ...).\n\nEntries whose header follows a known convention are written to the good output, all others to the bad output, both byte-for-byte as they appeared in the input. A tally of the database types seen is printed on completion."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: validate::ValidateArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the database type tally
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crash_flag_defaults_to_false() {
        let cli = Cli::try_parse_from(["validate-fasta", "in.fa", "good.fa", "bad.fa"]).unwrap();
        assert_eq!(cli.args.input, Path::new("in.fa"));
        assert_eq!(cli.args.good_output, Path::new("good.fa"));
        assert_eq!(cli.args.bad_output, Path::new("bad.fa"));
        assert!(!cli.args.crash_on_invalid);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_crash_flag_parsed_from_fourth_argument() {
        let cli =
            Cli::try_parse_from(["validate-fasta", "in.fa", "good.fa", "bad.fa", "true"]).unwrap();
        assert!(cli.args.crash_on_invalid);

        let cli =
            Cli::try_parse_from(["validate-fasta", "in.fa", "good.fa", "bad.fa", "false"]).unwrap();
        assert!(!cli.args.crash_on_invalid);
    }

    #[test]
    fn test_crash_flag_is_case_insensitive() {
        for (value, expected) in [("TRUE", true), ("True", true), ("FALSE", false), ("False", false)] {
            let cli = Cli::try_parse_from(["validate-fasta", "in.fa", "good.fa", "bad.fa", value])
                .unwrap();
            assert_eq!(cli.args.crash_on_invalid, expected, "{value}");
        }
    }

    #[test]
    fn test_crash_flag_rejects_other_values() {
        assert!(
            Cli::try_parse_from(["validate-fasta", "in.fa", "good.fa", "bad.fa", "maybe"]).is_err()
        );
    }

    #[test]
    fn test_outputs_are_required() {
        assert!(Cli::try_parse_from(["validate-fasta", "in.fa", "good.fa"]).is_err());
    }

    #[test]
    fn test_format_option() {
        let cli = Cli::try_parse_from([
            "validate-fasta",
            "in.fa",
            "good.fa",
            "bad.fa",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}

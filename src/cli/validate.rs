use std::io;
use std::path::PathBuf;

use clap::Args;
use tracing::error;

use crate::catalog::store::FastaCatalog;
use crate::catalog::writer::{write_partitions, WriteSummary};
use crate::cli::OutputFormat;
use crate::matching::classifier::HeaderClassifier;
use crate::parsing::fasta::{parse_fasta_file, ParseError};

#[derive(Args)]
pub struct ValidateArgs {
    /// Input FASTA file (plain, .gz or .bgz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file for entries with well-formed headers
    #[arg(required = true)]
    pub good_output: PathBuf,

    /// Output file for entries with malformed headers
    #[arg(required = true)]
    pub bad_output: PathBuf,

    /// Exit with status 1 as soon as a malformed header is found (true or false, any case)
    #[arg(
        value_name = "CRASH_ON_INVALID",
        default_value_t = false,
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub crash_on_invalid: bool,

    /// Log the diagnostics of each header naming convention while classifying
    #[arg(long)]
    pub trace_matchers: bool,
}

/// Execute the validation: parse, classify, write both outputs, report
///
/// An unreadable input is logged and treated as an empty database.
///
/// # Errors
///
/// Returns an error if `crash_on_invalid` is set and a malformed header is
/// found, or if either output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = match parse_fasta_file(&args.input) {
        Ok(records) => records,
        Err(ParseError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            error!("FASTA file not found: {}: {e}", args.input.display());
            Vec::new()
        }
        Err(e) => {
            error!("Failed to read FASTA input {}: {e}", args.input.display());
            Vec::new()
        }
    };

    let classifier = HeaderClassifier::new().with_quiet(!args.trace_matchers);
    let catalog = FastaCatalog::build_with(records, &classifier, args.crash_on_invalid)?;

    let summary = write_partitions(&catalog, &args.good_output, &args.bad_output)?;

    if verbose {
        eprintln!(
            "Parsed {} records ({} well-formed, {} malformed)",
            catalog.len(),
            summary.good,
            summary.bad
        );
    }

    match format {
        OutputFormat::Text => print_text_report(&catalog),
        OutputFormat::Json => print_json_report(&args, &catalog, summary)?,
        OutputFormat::Tsv => print_tsv_report(&catalog),
    }

    Ok(())
}

fn print_text_report(catalog: &FastaCatalog) {
    println!("Database Types");
    for (database, count) in catalog.database_counts() {
        println!("{database}: {count}");
    }
}

fn print_json_report(
    args: &ValidateArgs,
    catalog: &FastaCatalog,
    summary: WriteSummary,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "good_output": args.good_output.display().to_string(),
        "bad_output": args.bad_output.display().to_string(),
        "records": catalog.len(),
        "good": summary.good,
        "bad": summary.bad,
        "database_types": catalog.database_counts(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(catalog: &FastaCatalog) {
    println!("database_type\tcount");
    for (database, count) in catalog.database_counts() {
        println!("{database}\t{count}");
    }
}

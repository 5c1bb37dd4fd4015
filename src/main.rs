use clap::Parser;
use tracing_subscriber::EnvFilter;

use validate_fasta::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flags; stdout is reserved for the report
    let filter = if cli.args.trace_matchers {
        EnvFilter::new("validate_fasta=trace,info")
    } else if cli.verbose {
        EnvFilter::new("validate_fasta=debug,info")
    } else {
        EnvFilter::new("validate_fasta=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::validate::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}

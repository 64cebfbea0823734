use anyhow::Context;
use clap::Parser;
use std::process;
use toronto_climate::cli::Args;
use toronto_climate::processor::AnalysisProcessor;
use tracing::debug;

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();
    debug!("Running with configuration: {:?}", config);

    let processor = AnalysisProcessor::new(args.input_path.clone(), args.output_path.clone())
        .with_context(|| format!("Cannot open input {}", args.input_path.display()))?
        .with_config(config);

    processor
        .process()
        .with_context(|| format!("Analysis of {} failed", args.input_path.display()))?;

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("toronto_climate={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

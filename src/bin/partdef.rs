use clap::{Parser, ValueEnum};
use partdef::{formatter::Formatter, Error, InternalResult, PartitionConfig};
use std::{fs::File, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Per-partition summary table
    Text,
    /// Partition set as JSON
    Json,
    /// Normalized partition definitions
    Canonical,
}

#[derive(Parser)]
#[command(author, version, about = "Parse and check alignment partition definitions", long_about = None)]
struct Cli {
    /// Partition definition file
    file: PathBuf,

    /// Number of sites in the alignment
    #[arg(short, long)]
    length: usize,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> InternalResult<String> {
    let config = match &cli.config {
        Some(path) => PartitionConfig::from_file(path)?,
        None => PartitionConfig::default(),
    };
    debug!("config: {:?}", config);

    let file = File::open(&cli.file)?;
    let set = partdef::Parser::new(file).parse_with_config(cli.length, config)?;
    info!(partitions = set.len(), "partition definitions parsed");

    let output = match cli.format {
        OutputFormat::Text => Formatter::default().summary(&set),
        OutputFormat::Json => serde_json::to_string_pretty(&set)
            .map_err(|e| Error::internal(format!("Failed to serialize: {}", e)))?,
        OutputFormat::Canonical => Formatter::default().format(&set),
    };
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

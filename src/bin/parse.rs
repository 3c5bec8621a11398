//! binarycookies-parse: CLI tool for exporting binary cookie files.

use binarycookies::{write_results, CookieParser, ExportConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "binarycookies-parse")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "iOS binary cookie parser", long_about = None)]
struct Cli {
    /// Input file path
    #[arg(short, long, alias = "input_path")]
    input_path: PathBuf,

    /// Output file type, such as txt, json, and csv
    #[arg(short = 't', long, alias = "output_type")]
    output_type: String,

    /// Output file path
    #[arg(short, long, alias = "output_path")]
    output_path: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::from_str(&cli.output_type)?;
    let config = ExportConfig::new(format, &cli.output_path);

    log::info!("Parsing a cookie file: {:?}", cli.input_path);
    let records = CookieParser::open(&cli.input_path)?.parse()?;

    if records.is_empty() {
        log::warn!("No cookies found in {:?}, nothing written", cli.input_path);
        return Ok(());
    }

    let path = write_results(&records, &config, &cli.input_path)?;
    log::info!("Saving parsing results to: {:?}", path);
    Ok(())
}

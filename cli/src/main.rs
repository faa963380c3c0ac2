//! Folio command-line tool
//!
//! Loads a CMS config, validates every collection in it, and answers
//! questions about entries without touching any content.
//!
//! Usage:
//!   folio --config config.yml check
//!   folio --config config.yml path posts hello
//!
//! An invalid config exits non-zero with the error naming the collection.

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use folio_cli::{Command, load, run};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Check Folio CMS configs and query collections")]
struct Args {
    /// Path to the CMS config file
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let collections = load(&args.config)?;
    info!("Loaded {} collection(s) from {}", collections.len(), args.config.display());

    let output = run(&collections, &args.command)?;
    println!("{output}");
    Ok(())
}

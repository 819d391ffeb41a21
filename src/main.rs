//! ngdc-rename: restore original chromosome names in genome FASTA/GFF3 files
//!
//! Subcommands:
//! - `ngdc`: map NGDC accessions to the `OriSeqID` found in FASTA headers
//! - `custom`: map IDs through a tab-separated mapping file

mod custom;
mod error;
mod fasta;
mod gff;
mod idmap;
mod ngdc;
mod rename;
mod seqio;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// ngdc-rename CLI
#[derive(Parser, Debug)]
#[command(name = "ngdc-rename")]
#[command(author, version, long_about = None)]
#[command(about = "Rename chromosome IDs in genome FASTA and GFF files")]
struct Cli {
    /// Subcommands
    #[command(subcommand)]
    command: Commands,

    /// Also log per-header decisions
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rename NGDC accessions using the OriSeqID of each FASTA header
    Ngdc(ngdc::NgdcArgs),
    /// Rename IDs using a tab-separated mapping file
    Custom(custom::CustomArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("ngdc_rename=debug")
    } else {
        EnvFilter::new("ngdc_rename=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Ngdc(args) => ngdc::run(args)?,
        Commands::Custom(args) => custom::run(args)?,
    }
    Ok(())
}

//! Arguments and driver shared by the `ngdc` and `custom` subcommands.
//!
//! Both commands differ only in where the mapping comes from; once it exists the
//! FASTA is always rewritten and the GFF3 optionally so.

use crate::error::RenameError;
use crate::fasta::rewrite_fasta;
use crate::gff::rewrite_gff;
use crate::idmap::IdMapping;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Input/output files common to every rename command.
#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Input FASTA file
    #[arg(short = 'f', long = "fasta", value_name = "FASTA")]
    pub fasta: PathBuf,

    /// Output FASTA file
    #[arg(short = 'o', long = "output", value_name = "FASTA")]
    pub output: PathBuf,

    /// Input GFF3 file (requires --output-gff)
    #[arg(short = 'g', long = "gff", value_name = "GFF")]
    pub gff: Option<PathBuf>,

    /// Output GFF3 file (requires --gff)
    #[arg(long = "output-gff", visible_alias = "og", value_name = "GFF")]
    pub output_gff: Option<PathBuf>,
}

impl RenameArgs {
    /// The GFF input/output pair, if one was requested. Both or neither must be given.
    pub fn gff_pair(&self) -> Result<Option<(&Path, &Path)>, RenameError> {
        match (&self.gff, &self.output_gff) {
            (Some(i), Some(o)) => Ok(Some((i.as_path(), o.as_path()))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(RenameError::Usage(
                "--output-gff is required when --gff is specified".into(),
            )),
            (None, Some(_)) => Err(RenameError::Usage(
                "--gff is required when --output-gff is specified".into(),
            )),
        }
    }
}

/// Log the mapping size and every pair in accession order.
pub fn report_mapping(mapping: &IdMapping) {
    info!("Found {} chromosome mappings", mapping.len());
    if mapping.is_empty() {
        warn!("ID mapping is empty; all identifiers will be kept as-is");
    }
    for (acc, ori) in mapping.iter() {
        info!("  {} -> {}", acc, ori);
    }
}

/// Rewrite the FASTA, then the GFF3 if requested, through `mapping`.
pub fn apply(args: &RenameArgs, mapping: &IdMapping) -> Result<()> {
    let gff = args.gff_pair()?;

    info!("Renaming FASTA file to {}...", args.output.display());
    let stats = rewrite_fasta(&args.fasta, &args.output, mapping)
        .with_context(|| format!("Failed to rename FASTA {}", args.fasta.display()))?;
    info!(
        "Renamed {} headers, kept {} unmapped ({} lines)",
        stats.renamed, stats.unmapped, stats.lines
    );

    if let Some((input, output)) = gff {
        info!("Renaming GFF file to {}...", output.display());
        let stats = rewrite_gff(input, output, mapping)
            .with_context(|| format!("Failed to rename GFF {}", input.display()))?;
        info!(
            "Renamed {} records, kept {} unmapped ({} lines)",
            stats.renamed, stats.unmapped, stats.lines
        );
    }

    info!("Done!");
    Ok(())
}

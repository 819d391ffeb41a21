//! Rename using NGDC `OriSeqID` metadata (`ngdc`).
//!
//! NGDC (GWH) assemblies name sequences `GWHGECT00000001.1` and keep the
//! submitter's name in a header token:
//!
//! ```text
//! >GWHGECT00000001.1   Chromosome 1A   Complete=T   Circular=F   OriSeqID=Chr1A   Len=600907804
//! ```
//!
//! This command builds the accession → `OriSeqID` mapping from the FASTA headers,
//! then rewrites the FASTA (and optionally a GFF3) with the original names.
//!
//! ### Example
//! ```text
//! ngdc-rename ngdc -f GWH.genome.fasta -o genome.fa -g GWH.gff --output-gff genome.gff3
//! ```

use crate::idmap::IdMapping;
use crate::rename::{apply, report_mapping, RenameArgs};
use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct NgdcArgs {
    #[command(flatten)]
    pub files: RenameArgs,
}

/// Execute the `ngdc` subcommand.
pub fn run(args: NgdcArgs) -> Result<()> {
    let files = args.files;
    files.gff_pair()?;

    info!("Building ID mapping from {} (OriSeqID)...", files.fasta.display());
    let mapping = IdMapping::from_fasta(&files.fasta)
        .with_context(|| format!("Failed to build ID mapping from {}", files.fasta.display()))?;
    report_mapping(&mapping);

    apply(&files, &mapping)
}

//! Rename using a user-supplied mapping file (`custom`).
//!
//! The mapping file is tab-separated, one `old_id<TAB>new_id` pair per line.
//! Blank lines and `#` comments are ignored; malformed lines are skipped with a warning.

use crate::idmap::IdMapping;
use crate::rename::{apply, report_mapping, RenameArgs};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CustomArgs {
    #[command(flatten)]
    pub files: RenameArgs,

    /// ID mapping file (tab-separated: old_id<TAB>new_id)
    #[arg(short = 'm', long = "map", value_name = "TSV")]
    pub map: PathBuf,
}

/// Execute the `custom` subcommand.
pub fn run(args: CustomArgs) -> Result<()> {
    args.files.gff_pair()?;

    info!("Loading ID mapping from {}...", args.map.display());
    let mapping = IdMapping::from_tsv(&args.map)
        .with_context(|| format!("Failed to load ID mapping from {}", args.map.display()))?;
    report_mapping(&mapping);

    apply(&args.files, &mapping)
}

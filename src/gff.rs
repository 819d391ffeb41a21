//! GFF3 rewriter.
//!
//! Only column 1 (seqid) of data rows is touched. Comments, pragmas and blank
//! lines are copied verbatim. Every other line is a row, including anything
//! after a `##FASTA` directive.

use crate::error::RenameError;
use crate::idmap::IdMapping;
use crate::seqio::{
    create_output, is_space, next_line, open_input, split_terminator, RewriteStats,
    StreamError,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Rewrite `input` into `output` through `mapping`.
pub fn rewrite_gff(
    input: &Path,
    output: &Path,
    mapping: &IdMapping,
) -> Result<RewriteStats, RenameError> {
    let mut rdr = open_input(input)?;
    let mut w = create_output(output)?;
    rewrite_gff_stream(&mut rdr, &mut w, mapping).map_err(|e| e.at(input, output))
}

pub fn rewrite_gff_stream<R: BufRead, W: Write>(
    rdr: &mut R,
    w: &mut W,
    mapping: &IdMapping,
) -> Result<RewriteStats, StreamError> {
    let mut stats = RewriteStats::default();
    let mut line = Vec::new();
    while next_line(rdr, &mut line).map_err(StreamError::Read)? {
        stats.lines += 1;
        write_gff_line(w, &line, mapping, &mut stats).map_err(StreamError::Write)?;
    }
    w.flush().map_err(StreamError::Write)?;
    Ok(stats)
}

fn is_passthrough(line: &[u8]) -> bool {
    line.first() == Some(&b'#') || line.iter().all(is_space)
}

/// Emit one GFF line with its seqid column renamed when mapped.
fn write_gff_line<W: Write>(
    w: &mut W,
    line: &[u8],
    mapping: &IdMapping,
    stats: &mut RewriteStats,
) -> io::Result<()> {
    if is_passthrough(line) {
        return w.write_all(line);
    }
    // seqid runs up to the first tab, or to the terminator on a single-column row
    let (content, _) = split_terminator(line);
    let seqid_end = content.iter().position(|&b| b == b'\t').unwrap_or(content.len());
    let (seqid, rest) = line.split_at(seqid_end);

    let renamed = std::str::from_utf8(seqid).ok().and_then(|s| mapping.get(s));
    match renamed {
        Some(ori) => {
            stats.renamed += 1;
            w.write_all(ori.as_bytes())?;
            w.write_all(rest)
        }
        None => {
            stats.unmapped += 1;
            debug!("Keeping unmapped seqid {}", String::from_utf8_lossy(seqid));
            w.write_all(line)
        }
    }
}

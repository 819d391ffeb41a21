//! FASTA rewriter.
//!
//! Streams a FASTA line by line. A header whose accession is in the mapping is
//! replaced by `>` + original ID, dropping the rest of its metadata; every other
//! line, including unmapped headers, is copied byte-for-byte.

use crate::error::RenameError;
use crate::idmap::IdMapping;
use crate::seqio::{
    accession, create_output, is_header, next_line, open_input, split_terminator, RewriteStats,
    StreamError,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Rewrite `input` into `output` through `mapping`.
pub fn rewrite_fasta(
    input: &Path,
    output: &Path,
    mapping: &IdMapping,
) -> Result<RewriteStats, RenameError> {
    let mut rdr = open_input(input)?;
    let mut w = create_output(output)?;
    rewrite_fasta_stream(&mut rdr, &mut w, mapping).map_err(|e| e.at(input, output))
}

pub fn rewrite_fasta_stream<R: BufRead, W: Write>(
    rdr: &mut R,
    w: &mut W,
    mapping: &IdMapping,
) -> Result<RewriteStats, StreamError> {
    let mut stats = RewriteStats::default();
    let mut line = Vec::new();
    while next_line(rdr, &mut line).map_err(StreamError::Read)? {
        stats.lines += 1;
        write_fasta_line(w, &line, mapping, &mut stats).map_err(StreamError::Write)?;
    }
    w.flush().map_err(StreamError::Write)?;
    Ok(stats)
}

/// Emit one raw FASTA line, renaming it if it is a mapped header.
///
/// The line keeps its own terminator, so `\r\n` input stays `\r\n`.
fn write_fasta_line<W: Write>(
    w: &mut W,
    line: &[u8],
    mapping: &IdMapping,
    stats: &mut RewriteStats,
) -> io::Result<()> {
    if !is_header(line) {
        return w.write_all(line);
    }
    let acc = accession(line);
    match acc.and_then(|a| mapping.get(a)) {
        Some(ori) => {
            stats.renamed += 1;
            let (_, term) = split_terminator(line);
            w.write_all(b">")?;
            w.write_all(ori.as_bytes())?;
            w.write_all(term)
        }
        None => {
            stats.unmapped += 1;
            debug!("Keeping header of unmapped sequence {}", acc.unwrap_or("<unnamed>"));
            w.write_all(line)
        }
    }
}

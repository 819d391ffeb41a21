//! Line-level I/O shared by the mapping builders and the rewriters.
//!
//! Everything here works on raw bytes read with [`BufRead::read_until`], so
//! sequence payload never has to be valid UTF-8 and every line keeps its
//! original terminator.

use crate::error::RenameError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;

/// Key of the FASTA header token that carries the original sequence ID.
pub const ORI_SEQ_ID_KEY: &str = "OriSeqID=";

/// Open an input file for buffered line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>, RenameError> {
    let f = File::open(path).map_err(|e| RenameError::read(path, e))?;
    Ok(BufReader::new(f))
}

/// Create (or truncate) an output file behind a buffered writer.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, RenameError> {
    let f = File::create(path).map_err(|e| RenameError::write(path, e))?;
    Ok(BufWriter::new(f))
}

/// Which side of a streaming pass failed.
#[derive(Debug)]
pub enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

impl StreamError {
    /// Attach the file path of the failing side.
    pub fn at(self, input: &Path, output: &Path) -> RenameError {
        match self {
            StreamError::Read(e) => RenameError::read(input, e),
            StreamError::Write(e) => RenameError::write(output, e),
        }
    }
}

/// Per-pass counters reported once a file has been rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines read from the input.
    pub lines: usize,
    /// Identifiers replaced through the mapping.
    pub renamed: usize,
    /// Identifiers left as-is because the mapping has no entry for them.
    pub unmapped: usize,
}

/// Read the next line, terminator included, into `buf`. Returns `false` at EOF.
pub fn next_line<R: BufRead>(rdr: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    Ok(rdr.read_until(b'\n', buf)? > 0)
}

/// Split a raw line into its content and its terminator (`\n`, `\r\n` or empty).
pub fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    let mut end = line.len();
    if end > 0 && line[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && line[end - 1] == b'\r' {
            end -= 1;
        }
    }
    line.split_at(end)
}

pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&b'>')
}

/// ASCII whitespace, vertical tab included.
pub fn is_space(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == b'\x0b'
}

/// Whitespace-delimited tokens of a header; any whitespace run counts as one separator.
fn tokens(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split(is_space).filter(|t| !t.is_empty())
}

/// Accession of a FASTA header line: the first token without its leading `>`s.
///
/// Returns `None` for a bare `>` or a token that is not valid UTF-8.
pub fn accession(line: &[u8]) -> Option<&str> {
    let (content, _) = split_terminator(line);
    let first = tokens(content).next()?;
    let skip = first.iter().take_while(|&&b| b == b'>').count();
    let first = &first[skip..];
    if first.is_empty() {
        return None;
    }
    std::str::from_utf8(first).ok()
}

/// Value of the first `OriSeqID=<value>` token after the accession, if any.
///
/// The key must make up the whole start of a token; an empty value counts as absent.
pub fn ori_seq_id(line: &[u8]) -> Option<&str> {
    let (content, _) = split_terminator(line);
    tokens(content)
        .skip(1)
        .find_map(|t| t.strip_prefix(ORI_SEQ_ID_KEY.as_bytes()))
        .filter(|v| !v.is_empty())
        .and_then(|v| std::str::from_utf8(v).ok())
}

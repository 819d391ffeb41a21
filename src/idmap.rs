//! Accession → original-ID mapping.
//!
//! A mapping comes from one of two sources:
//! - the `OriSeqID=` token of NGDC FASTA headers ([`IdMapping::from_fasta`])
//! - a two-column tab-separated file ([`IdMapping::from_tsv`])
//!
//! Either way it is built once and then only read by the rewriters.

use crate::error::RenameError;
use crate::seqio::{accession, is_header, next_line, open_input, ori_seq_id};
use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{debug, warn};

/// Immutable table from accession ID to original sequence ID.
///
/// Iteration is in sorted accession order. Duplicate accessions keep the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMapping {
    map: BTreeMap<String, String>,
}

impl IdMapping {
    /// Build a mapping from the headers of an NGDC FASTA file.
    pub fn from_fasta(path: &Path) -> Result<Self, RenameError> {
        let mut rdr = open_input(path)?;
        Self::from_fasta_reader(&mut rdr).map_err(|e| RenameError::read(path, e))
    }

    /// Scan FASTA headers; sequence lines are skipped without being kept.
    pub fn from_fasta_reader<R: BufRead>(rdr: &mut R) -> io::Result<Self> {
        let mut map = BTreeMap::new();
        let mut line = Vec::new();
        while next_line(rdr, &mut line)? {
            if !is_header(&line) {
                continue;
            }
            match (accession(&line), ori_seq_id(&line)) {
                (Some(acc), Some(ori)) => {
                    map.insert(acc.to_string(), ori.to_string());
                }
                (acc, _) => debug!("No OriSeqID on header {}", acc.unwrap_or("<unnamed>")),
            }
        }
        Ok(Self { map })
    }

    /// Load a mapping from a tab-separated `old_id<TAB>new_id` file.
    pub fn from_tsv(path: &Path) -> Result<Self, RenameError> {
        let mut rdr = open_input(path)?;
        Self::from_tsv_reader(&mut rdr).map_err(|e| RenameError::read(path, e))
    }

    /// Blank lines and `#` comments are ignored. Lines without exactly two
    /// fields are skipped with a warning.
    pub fn from_tsv_reader<R: BufRead>(rdr: &mut R) -> io::Result<Self> {
        let mut map = BTreeMap::new();
        for (idx, line_res) in rdr.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 2 {
                warn!("Skipping invalid line {} in mapping file: {}", idx + 1, line);
                continue;
            }
            let (old_id, new_id) = (fields[0].trim(), fields[1].trim());
            if !old_id.is_empty() && !new_id.is_empty() {
                map.insert(old_id.to_string(), new_id.to_string());
            }
        }
        Ok(Self { map })
    }

    pub fn get(&self, accession: &str) -> Option<&str> {
        self.map.get(accession).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `(accession, original)` pairs in accession order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for IdMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { map: iter.into_iter().collect() }
    }
}

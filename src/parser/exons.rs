//! Exon table parser.
//!
//! Parses the whitespace-delimited exon dump (one exon per line:
//! `chromosome start end gene_symbol transcript_id exon_number`) and groups
//! exons by transcript and chromosome.

use ahash::AHashMap;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::parser::util::{create_buffered_reader, is_gzip_path, open_file, read_line};
use crate::types::{Coordinate, ExonRecord};

/// Number of whitespace-separated fields on every exon table line.
const EXON_TABLE_FIELDS: usize = 6;

/// Exons grouped by `(transcript_id, chromosome)`.
///
/// Groups iterate in the order their key first appeared in the file, and
/// exons within a group keep file order.
#[derive(Debug, Clone, Default)]
pub struct ExonIndex {
    groups: IndexMap<(String, String), Vec<ExonRecord>>,
    /// Group positions of each transcript, ascending.
    positions: AHashMap<String, Vec<usize>>,
}

/// Result of looking up a transcript in an [`ExonIndex`].
#[derive(Debug, PartialEq, Eq)]
pub enum TranscriptExons<'a> {
    /// Exon groups of the transcript, one per chromosome, as `(chromosome, exons)`.
    Found(Vec<(&'a str, &'a [ExonRecord])>),
    /// The transcript does not appear in the exon table.
    Unknown,
}

impl ExonIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exon to the group of `transcript` on the exon's chromosome.
    pub fn insert(&mut self, transcript: &str, exon: ExonRecord) {
        match self
            .groups
            .entry((transcript.to_string(), exon.chromosome.clone()))
        {
            Entry::Occupied(mut entry) => entry.get_mut().push(exon),
            Entry::Vacant(entry) => {
                let position = entry.index();
                entry.insert(vec![exon]);
                self.positions
                    .entry(transcript.to_string())
                    .or_default()
                    .push(position);
            }
        }
    }

    /// Look up all exon groups of a transcript.
    pub fn lookup(&self, transcript: &str) -> TranscriptExons<'_> {
        let groups: Vec<(&str, &[ExonRecord])> = self
            .positions
            .get(transcript)
            .into_iter()
            .flatten()
            .filter_map(|&position| self.groups.get_index(position))
            .map(|((_, chrom), exons)| (chrom.as_str(), exons.as_slice()))
            .collect();

        if groups.is_empty() {
            TranscriptExons::Unknown
        } else {
            TranscriptExons::Found(groups)
        }
    }

    /// Exons of one transcript on one chromosome.
    pub fn get(&self, transcript: &str, chromosome: &str) -> Option<&[ExonRecord]> {
        self.groups
            .get(&(transcript.to_string(), chromosome.to_string()))
            .map(Vec::as_slice)
    }

    /// Number of `(transcript, chromosome)` groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of exon records.
    pub fn num_exons(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Parse an exon table and return the grouped exons.
///
/// Paths ending in `.gz` are decompressed transparently.
pub fn parse_exon_table(path: &Path) -> Result<ExonIndex> {
    let file = open_file(path)?;
    let reader = create_buffered_reader(file, path);

    parse_exon_reader(reader, path)
}

/// Parse exon table data from a reader. `path` is only used for error reporting.
pub fn parse_exon_reader<R: BufRead>(mut reader: R, path: &Path) -> Result<ExonIndex> {
    let compressed = is_gzip_path(path);
    let mut index = ExonIndex::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        line_number += 1;
        let line = match read_line(&mut reader, &mut buf, path, line_number, compressed)? {
            Some(line) => line,
            None => break,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != EXON_TABLE_FIELDS {
            return Err(Error::malformed(
                path,
                line_number,
                format!(
                    "expected {} whitespace-separated fields, found {}",
                    EXON_TABLE_FIELDS,
                    fields.len()
                ),
            ));
        }

        // gene_symbol (fields[3]) is not needed downstream
        let (chrom, start, end, transcript_id, exon_number) =
            (fields[0], fields[1], fields[2], fields[4], fields[5]);

        let start = Coordinate::parse(start).ok_or_else(|| {
            Error::malformed(path, line_number, format!("invalid start coordinate '{}'", start))
        })?;
        let end = Coordinate::parse(end).ok_or_else(|| {
            Error::malformed(path, line_number, format!("invalid end coordinate '{}'", end))
        })?;

        index.insert(
            transcript_id,
            ExonRecord::new(chrom.to_string(), start, end, exon_number.to_string()),
        );
    }

    if index.is_empty() {
        warn!("Exon table {} contains no exons", path.display());
    }

    debug!(
        "Loaded {} exons in {} transcript/chromosome groups from {}",
        index.num_exons(),
        index.len(),
        path.display()
    );

    Ok(index)
}

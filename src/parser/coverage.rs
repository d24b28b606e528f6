//! Coverage file parser.
//!
//! Reads the gzip-compressed, tab-delimited coverage report and groups the
//! covered regions by chromosome.

use ahash::AHashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::util::{create_gzip_reader, open_file, read_line};
use crate::types::{Coordinate, CoverageRegion};

/// Covered regions organized by chromosome, each list in file order.
#[derive(Debug, Clone, Default)]
pub struct CoverageIndex {
    pub regions_by_chrom: AHashMap<String, Vec<CoverageRegion>>,
}

impl CoverageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regions on `chromosome`, or `None` if the chromosome never appeared.
    pub fn get(&self, chromosome: &str) -> Option<&[CoverageRegion]> {
        self.regions_by_chrom.get(chromosome).map(Vec::as_slice)
    }

    /// Total number of regions across all chromosomes.
    pub fn num_regions(&self) -> usize {
        self.regions_by_chrom.values().map(Vec::len).sum()
    }
}

/// Parse a gzip-compressed coverage file.
///
/// The file is always decoded as gzip, whatever its extension. A zero-byte
/// file holds no regions.
pub fn parse_coverage(path: &Path) -> Result<CoverageIndex> {
    let file = open_file(path)?;
    if file.metadata()?.len() == 0 {
        debug!("Coverage file {} is empty", path.display());
        return Ok(CoverageIndex::new());
    }
    let reader = create_gzip_reader(file);

    parse_coverage_reader(reader, path)
}

/// Parse decompressed coverage data from a reader. `path` is only used for error reporting.
pub fn parse_coverage_reader<R: BufRead>(mut reader: R, path: &Path) -> Result<CoverageIndex> {
    let mut index = CoverageIndex::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        line_number += 1;
        let line = match read_line(&mut reader, &mut buf, path, line_number, true)? {
            Some(line) => line,
            None => break,
        };

        if line.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t');
        let (chrom, start, end) = match (fields.next(), fields.next(), fields.next()) {
            (Some(chrom), Some(start), Some(end)) => (chrom, start, end),
            _ => {
                return Err(Error::malformed(
                    path,
                    line_number,
                    "expected at least 3 tab-separated fields",
                ))
            }
        };

        let start = Coordinate::parse(start).ok_or_else(|| {
            Error::malformed(path, line_number, format!("invalid start coordinate '{}'", start))
        })?;
        let end = Coordinate::parse(end).ok_or_else(|| {
            Error::malformed(path, line_number, format!("invalid end coordinate '{}'", end))
        })?;

        index
            .regions_by_chrom
            .entry(chrom.to_string())
            .or_default()
            .push(CoverageRegion::new(start, end));
    }

    debug!(
        "Loaded {} coverage regions on {} chromosomes from {}",
        index.num_regions(),
        index.regions_by_chrom.len(),
        path.display()
    );

    Ok(index)
}

//! txregions - report covered exons of selected transcripts.
//!
//! This library joins an exon table against a gzip-compressed coverage file
//! and reports every exon of the requested transcripts that overlaps a
//! covered region on the same chromosome.
//!
//! # Features
//!
//! - Parse whitespace-delimited exon tables (optionally gzipped)
//! - Parse gzip/bgzip coverage files with `#` comment lines
//! - Numeric or legacy lexical coordinate comparison
//! - Legacy `key=>"value"` output or TSV
//!
//! # Example
//!
//! ```ignore
//! use txregions::{collect_matches, Config};
//! use std::path::Path;
//!
//! let config = Config::default();
//! let matches = collect_matches(
//!     &["NM_000001"],
//!     Path::new("sample.coverage.gz"),
//!     Path::new("exons.txt"),
//!     &config,
//! )?;
//! for m in &matches {
//!     println!("{} exon {}", m.transcript, m.exon_number);
//! }
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod types;

use std::io::Write;
use std::path::Path;

pub use config::{Config, MissingChromosome, OutputFormat};
pub use error::{Error, Result};
pub use parser::{CoverageIndex, ExonIndex, TranscriptExons};
pub use types::{Coordinate, CoordinateOrdering, CoverageRegion, ExonRecord, MatchRecord};

/// Parse both input files and return the covered exons of `transcripts`.
///
/// The exon table is read first, then the coverage file.
pub fn collect_matches<S: AsRef<str>>(
    transcripts: &[S],
    coverage_path: &Path,
    exon_path: &Path,
    config: &Config,
) -> Result<Vec<MatchRecord>> {
    let exons = parser::parse_exon_table(exon_path)?;
    let coverage = parser::parse_coverage(coverage_path)?;

    matcher::find_covered_exons(transcripts, &exons, &coverage, config)
}

/// Run the whole pipeline: collect matches, write them to `writer`, and return them.
///
/// Nothing is written unless every stage succeeds.
pub fn run<S: AsRef<str>, W: Write>(
    transcripts: &[S],
    coverage_path: &Path,
    exon_path: &Path,
    config: &Config,
    writer: &mut W,
) -> Result<Vec<MatchRecord>> {
    let matches = collect_matches(transcripts, coverage_path, exon_path, config)?;
    output::write_matches(writer, &matches, config.format)?;
    Ok(matches)
}

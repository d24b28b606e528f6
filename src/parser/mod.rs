//! Parsers for the exon table and coverage file formats.

pub mod coverage;
pub mod exons;
pub mod util;

pub use coverage::{parse_coverage, CoverageIndex};
pub use exons::{parse_exon_table, ExonIndex, TranscriptExons};

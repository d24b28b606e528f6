//! Configuration and defaults for txregions.
//!
//! This module contains the configuration structure and option enums
//! that control how exons are matched against coverage and how results
//! are written.

use std::fmt;
use std::str::FromStr;

use crate::types::CoordinateOrdering;

/// What to do when a transcript lies on a chromosome absent from the coverage file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingChromosome {
    /// Abort the run with an error.
    Fail,
    /// Treat the chromosome as having no coverage regions.
    Skip,
}

/// Error type for parsing the missing-chromosome policy from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMissingChromosomeError;

impl fmt::Display for ParseMissingChromosomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid missing chromosome policy: expected 'fail' or 'skip'")
    }
}

impl std::error::Error for ParseMissingChromosomeError {}

impl FromStr for MissingChromosome {
    type Err = ParseMissingChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(MissingChromosome::Fail),
            "skip" => Ok(MissingChromosome::Skip),
            _ => Err(ParseMissingChromosomeError),
        }
    }
}

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested `key=>"value"` blocks consumed by the downstream report scripts.
    Legacy,
    /// Tab-separated table with a header line.
    Tsv,
}

/// Error type for parsing output format from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputFormatError;

impl fmt::Display for ParseOutputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid output format: expected 'legacy' or 'tsv'")
    }
}

impl std::error::Error for ParseOutputFormatError {}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(OutputFormat::Legacy),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(ParseOutputFormatError),
        }
    }
}

/// Configuration for the exon-to-coverage matching process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Comparison used by the overlap test.
    pub ordering: CoordinateOrdering,
    /// Behaviour for chromosomes missing from the coverage file.
    pub missing_chromosome: MissingChromosome,
    /// Serialization format of the results.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ordering: CoordinateOrdering::Numeric,
            missing_chromosome: MissingChromosome::Fail,
            format: OutputFormat::Legacy,
        }
    }
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

//! Exon-coverage overlap matching logic.
//!
//! This module implements the join between the exons of the requested
//! transcripts and the coverage regions on the same chromosome. Every
//! overlapping pair produces one [`MatchRecord`]; there is no interval index,
//! each exon is tested against every region of its chromosome.

use tracing::{debug, warn};

use crate::config::{Config, MissingChromosome};
use crate::error::{Error, Result};
use crate::parser::{CoverageIndex, ExonIndex, TranscriptExons};
use crate::types::{CoordinateOrdering, CoverageRegion, ExonRecord, MatchRecord};

/// Match the exons of one transcript on one chromosome against that chromosome's regions.
///
/// Records come out in exon-then-region order.
pub fn match_exons_to_regions(
    transcript: &str,
    exons: &[ExonRecord],
    regions: &[CoverageRegion],
    ordering: CoordinateOrdering,
) -> Vec<MatchRecord> {
    let mut matches = Vec::new();

    for exon in exons {
        for region in regions {
            if exon.overlaps(region, ordering) {
                matches.push(MatchRecord::from_exon(transcript, exon));
            }
        }
    }

    matches
}

/// Find every covered exon of the requested transcripts.
///
/// Transcripts are processed in the order given; unknown transcripts are
/// skipped without error. A transcript chromosome absent from the coverage
/// index fails with [`Error::MissingChromosome`] unless the config says to skip it.
pub fn find_covered_exons<S: AsRef<str>>(
    transcripts: &[S],
    exons: &ExonIndex,
    coverage: &CoverageIndex,
    config: &Config,
) -> Result<Vec<MatchRecord>> {
    let mut matches = Vec::new();

    for transcript in transcripts {
        let transcript = transcript.as_ref();

        let groups = match exons.lookup(transcript) {
            TranscriptExons::Found(groups) => groups,
            TranscriptExons::Unknown => {
                debug!("Transcript {} not in exon table, skipping", transcript);
                continue;
            }
        };

        for (chrom, transcript_exons) in groups {
            let regions = match (coverage.get(chrom), config.missing_chromosome) {
                (Some(regions), _) => regions,
                (None, MissingChromosome::Skip) => {
                    warn!(
                        "No coverage for {} (transcript {}), reporting no exons",
                        chrom, transcript
                    );
                    continue;
                }
                (None, MissingChromosome::Fail) => {
                    return Err(Error::MissingChromosome {
                        transcript: transcript.to_string(),
                        chromosome: chrom.to_string(),
                    });
                }
            };

            matches.extend(match_exons_to_regions(
                transcript,
                transcript_exons,
                regions,
                config.ordering,
            ));
        }
    }

    Ok(matches)
}

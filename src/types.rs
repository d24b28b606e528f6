//! Core data structures for txregions.
//!
//! Exons, coverage regions and the match records produced by joining them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How start/end coordinates are compared during the overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateOrdering {
    /// Compare the parsed integer values.
    Numeric,
    /// Compare the verbatim text byte by byte ("1000" sorts before "200").
    Lexical,
}

/// Error type for parsing coordinate ordering from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinateOrderingError;

impl fmt::Display for ParseCoordinateOrderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid comparison mode: expected 'numeric' or 'lexical'")
    }
}

impl std::error::Error for ParseCoordinateOrderingError {}

impl FromStr for CoordinateOrdering {
    type Err = ParseCoordinateOrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(CoordinateOrdering::Numeric),
            "lexical" => Ok(CoordinateOrdering::Lexical),
            _ => Err(ParseCoordinateOrderingError),
        }
    }
}

/// A start or end position as read from an input file.
///
/// The input text is kept so output reproduces it exactly
/// (leading zeros included) and so lexical comparison stays possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    text: String,
    value: u64,
}

impl Coordinate {
    /// Parse a coordinate field. Returns `None` if it is not an unsigned integer.
    pub fn parse(text: &str) -> Option<Self> {
        let value = text.parse().ok()?;
        Some(Coordinate {
            text: text.to_string(),
            value,
        })
    }

    /// The coordinate exactly as it appeared in the input.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Compare two coordinates under the given ordering.
    pub fn compare(&self, other: &Coordinate, ordering: CoordinateOrdering) -> Ordering {
        match ordering {
            CoordinateOrdering::Numeric => self.value.cmp(&other.value),
            CoordinateOrdering::Lexical => self.text.as_str().cmp(other.text.as_str()),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An exon row from the exon table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExonRecord {
    pub chromosome: String,
    pub start: Coordinate,
    pub end: Coordinate,
    pub exon_number: String,
}

impl ExonRecord {
    pub fn new(chromosome: String, start: Coordinate, end: Coordinate, exon_number: String) -> Self {
        ExonRecord {
            chromosome,
            start,
            end,
            exon_number,
        }
    }

    /// Closed-interval overlap test against a coverage region.
    ///
    /// Overlapping when `exon.start <= region.end` and `exon.end >= region.start`.
    pub fn overlaps(&self, region: &CoverageRegion, ordering: CoordinateOrdering) -> bool {
        self.start.compare(&region.end, ordering) != Ordering::Greater
            && self.end.compare(&region.start, ordering) != Ordering::Less
    }
}

/// A covered interval from the coverage file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRegion {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl CoverageRegion {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        CoverageRegion { start, end }
    }
}

/// One overlapping (exon, coverage region) pair.
///
/// An exon overlapping several regions yields one record per region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub transcript: String,
    pub chromosome: String,
    pub exon_start: String,
    pub exon_end: String,
    pub exon_number: String,
}

impl MatchRecord {
    /// Build a record for `exon` of `transcript`.
    pub fn from_exon(transcript: &str, exon: &ExonRecord) -> Self {
        MatchRecord {
            transcript: transcript.to_string(),
            chromosome: exon.chromosome.clone(),
            exon_start: exon.start.as_str().to_string(),
            exon_end: exon.end.as_str().to_string(),
            exon_number: exon.exon_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(text: &str) -> Coordinate {
        Coordinate::parse(text).unwrap()
    }

    fn exon(start: &str, end: &str) -> ExonRecord {
        ExonRecord::new("chr1".to_string(), coord(start), coord(end), "1".to_string())
    }

    fn region(start: &str, end: &str) -> CoverageRegion {
        CoverageRegion::new(coord(start), coord(end))
    }

    #[test]
    fn test_ordering_parsing() {
        assert_eq!("numeric".parse::<CoordinateOrdering>(), Ok(CoordinateOrdering::Numeric));
        assert_eq!("Lexical".parse::<CoordinateOrdering>(), Ok(CoordinateOrdering::Lexical));
        assert!("string".parse::<CoordinateOrdering>().is_err());
    }

    #[test]
    fn test_coordinate_parse() {
        let c = coord("00150");
        assert_eq!(c.value(), 150);
        assert_eq!(c.as_str(), "00150");
        assert_eq!(c.to_string(), "00150");

        assert!(Coordinate::parse("start").is_none());
        assert!(Coordinate::parse("-5").is_none());
        assert!(Coordinate::parse("").is_none());
    }

    #[test]
    fn test_coordinate_compare() {
        let a = coord("1000");
        let b = coord("200");
        assert_eq!(a.compare(&b, CoordinateOrdering::Numeric), Ordering::Greater);
        assert_eq!(a.compare(&b, CoordinateOrdering::Lexical), Ordering::Less);
    }

    #[test]
    fn test_overlap_closed_interval() {
        let e = exon("100", "200");
        let n = CoordinateOrdering::Numeric;

        assert!(e.overlaps(&region("150", "160"), n));
        assert!(e.overlaps(&region("50", "100"), n)); // touches start
        assert!(e.overlaps(&region("200", "300"), n)); // touches end
        assert!(e.overlaps(&region("50", "300"), n)); // contains exon
        assert!(!e.overlaps(&region("300", "400"), n));
        assert!(!e.overlaps(&region("10", "99"), n));
    }

    #[test]
    fn test_overlap_lexical_differs_from_numeric() {
        // 1000-3000 vs 200-300: disjoint numerically, but "1000" <= "300"
        // and "3000" >= "200" hold as strings.
        let e = exon("1000", "3000");
        let r = region("200", "300");
        assert!(!e.overlaps(&r, CoordinateOrdering::Numeric));
        assert!(e.overlaps(&r, CoordinateOrdering::Lexical));
    }

    #[test]
    fn test_match_record_keeps_text() {
        let e = ExonRecord::new("chrX".to_string(), coord("0100"), coord("200"), "7".to_string());
        let record = MatchRecord::from_exon("NM_1", &e);
        assert_eq!(record.transcript, "NM_1");
        assert_eq!(record.chromosome, "chrX");
        assert_eq!(record.exon_start, "0100");
        assert_eq!(record.exon_end, "200");
        assert_eq!(record.exon_number, "7");
    }
}

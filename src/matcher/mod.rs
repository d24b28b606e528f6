//! Matching logic for exons against coverage regions.

pub mod overlap;

pub use overlap::{find_covered_exons, match_exons_to_regions};

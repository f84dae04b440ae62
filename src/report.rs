//! Plain-text rendering of an [`AlignmentResult`].

use std::fmt;

use crate::sequence::GAP;
use crate::AlignmentResult;

const MATCH_MARK: char = '|';

/// `|` under columns holding the same base on both sides, space elsewhere.
pub fn match_line(aligned_seq1: &[u8], aligned_seq2: &[u8]) -> String {
    aligned_seq1
        .iter()
        .zip(aligned_seq2)
        .map(|(&a, &b)| if a == b && a != GAP { MATCH_MARK } else { ' ' })
        .collect()
}

/// Formats a percentage (already scaled to 0-100) with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Display adapter printing both aligned sequences, the match line and the
/// summary counts.
///
/// ```
/// use nw_aligner::{align, AlignmentReport, ScoringConfig};
///
/// let result = align("ACGT", "ACT", ScoringConfig::default()).unwrap();
/// let text = AlignmentReport::new(&result).to_string();
/// assert!(text.starts_with("Sequence 1: ACGT\n"));
/// assert!(text.contains("Similarity: 75.00%"));
/// ```
pub struct AlignmentReport<'a> {
    result: &'a AlignmentResult,
}

impl<'a> AlignmentReport<'a> {
    pub fn new(result: &'a AlignmentResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for AlignmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "Sequence 1: {}", String::from_utf8_lossy(&result.aligned_seq1))?;
        writeln!(
            f,
            "            {}",
            match_line(&result.aligned_seq1, &result.aligned_seq2)
        )?;
        writeln!(f, "Sequence 2: {}", String::from_utf8_lossy(&result.aligned_seq2))?;
        writeln!(f, "Score: {}", result.score)?;
        writeln!(f, "Similarity: {}", format_percent(result.stats.similarity))?;
        writeln!(f, "Matches: {}", result.stats.matches)?;
        writeln!(f, "Mismatches: {}", result.stats.mismatches)?;
        writeln!(f, "Gaps: {}", result.stats.gaps)
    }
}

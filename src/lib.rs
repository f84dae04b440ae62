//! Global pairwise DNA alignment (Needleman-Wunsch) with linear gap scoring.
//!
//! The pipeline runs in three stages connected by plain data:
//! [`ScoringMatrix::build`] fills the DP table, [`Traceback`] recovers one
//! optimal alignment from it and [`AlignmentStats::from_aligned`] derives the
//! counts and similarity percentage.
//!
//! ```
//! use nw_aligner::{align, ScoringConfig};
//!
//! let result = align("ACGT", "acgt", ScoringConfig::default()).unwrap();
//! assert_eq!(result.aligned_seq1, b"ACGT");
//! assert_eq!(result.stats.similarity, 100.0);
//! ```

use std::collections::BTreeSet;

use log::debug;
use thiserror::Error;

pub mod batch;
pub mod config;
pub mod report;
pub mod scoring;
pub mod sequence;
pub mod traceback;

pub use crate::batch::BatchAligner;
pub use crate::config::ScoringConfig;
pub use crate::report::AlignmentReport;
pub use crate::scoring::{AlignmentStats, ScoringMatrix};
pub use crate::sequence::{Sequence, ALPHABET, GAP};
pub use crate::traceback::{AlignedPair, Traceback, TracebackOperation};

// DNA scoring parameters
pub const DNA_MATCH: i32 = 1;
pub const DNA_MISMATCH: i32 = -1;
pub const DNA_GAP: i32 = -2;

pub type Result<T> = std::result::Result<T, AlignerError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignerError {
    #[error("Invalid bases found: {}. Only A, T, G, C are allowed.", format_symbols(.symbols))]
    InvalidSequence { symbols: BTreeSet<char> },
    #[error("Alignment worker failed: {0}")]
    Worker(String),
}

impl AlignerError {
    /// Offending symbols carried by an [`AlignerError::InvalidSequence`].
    pub fn invalid_symbols(&self) -> Option<&BTreeSet<char>> {
        match self {
            AlignerError::InvalidSequence { symbols } => Some(symbols),
            AlignerError::Worker(_) => None,
        }
    }
}

fn format_symbols(symbols: &BTreeSet<char>) -> String {
    let joined: Vec<String> = symbols.iter().map(char::to_string).collect();
    format!("{{{}}}", joined.join(", "))
}

/// Outcome of one global alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    /// Optimal score, cell (m, n) of the scoring matrix.
    pub score: i64,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
    pub stats: AlignmentStats,
}

impl AlignmentResult {
    pub fn similarity(&self) -> f64 {
        self.stats.similarity
    }

    /// Length shared by both aligned sequences.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }
}

/// Aligns pairs of sequences under a fixed [`ScoringConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    config: ScoringConfig,
}

impl Aligner {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validates both raw sequences, then aligns them.
    pub fn align(&self, seq1: &str, seq2: &str) -> Result<AlignmentResult> {
        let seq1 = Sequence::new(seq1)?;
        let seq2 = Sequence::new(seq2)?;
        Ok(self.align_sequences(&seq1, &seq2))
    }

    /// Aligns two already validated sequences. Infallible.
    pub fn align_sequences(&self, seq1: &Sequence, seq2: &Sequence) -> AlignmentResult {
        let matrix = ScoringMatrix::build(seq1, seq2, &self.config);
        debug!(
            "Filled {}x{} scoring matrix, optimal score {}",
            matrix.rows(),
            matrix.cols(),
            matrix.score()
        );

        let pair = Traceback::new(&matrix, seq1, seq2, &self.config).reconstruct_alignment();
        let stats = AlignmentStats::from_aligned(&pair.aligned_seq1, &pair.aligned_seq2);
        debug!(
            "Alignment length {}: {} matches, {} mismatches, {} gaps",
            pair.len(),
            stats.matches,
            stats.mismatches,
            stats.gaps
        );

        AlignmentResult {
            score: matrix.score(),
            aligned_seq1: pair.aligned_seq1,
            aligned_seq2: pair.aligned_seq2,
            operations: pair.operations,
            stats,
        }
    }
}

/// Validates and globally aligns `seq1` against `seq2`.
pub fn align(seq1: &str, seq2: &str, config: ScoringConfig) -> Result<AlignmentResult> {
    Aligner::new(config).align(seq1, seq2)
}

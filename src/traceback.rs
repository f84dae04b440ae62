use log::trace;

use crate::scoring::ScoringMatrix;
use crate::sequence::{Sequence, GAP};
use crate::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Base from `seq2` against a gap in `seq1`.
    Insertion,
    /// Base from `seq1` against a gap in `seq2`.
    Deletion,
}

/// Two equal-length aligned sequences and the column operations between them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignedPair {
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    /// Rescores the columns under `config`. For a traceback of an optimal
    /// matrix this equals [`ScoringMatrix::score`].
    pub fn score(&self, config: &ScoringConfig) -> i64 {
        self.aligned_seq1
            .iter()
            .zip(&self.aligned_seq2)
            .map(|(&a, &b)| {
                if a == GAP || b == GAP {
                    config.gap()
                } else {
                    config.substitution(a, b)
                }
            })
            .sum()
    }
}

/// Walks a filled [`ScoringMatrix`] back from its bottom-right corner.
pub struct Traceback<'a> {
    matrix: &'a ScoringMatrix,
    seq1: &'a [u8],
    seq2: &'a [u8],
    config: &'a ScoringConfig,
}

impl<'a> Traceback<'a> {
    /// `matrix` must have been built from the same sequences and config.
    pub fn new(
        matrix: &'a ScoringMatrix,
        seq1: &'a Sequence,
        seq2: &'a Sequence,
        config: &'a ScoringConfig,
    ) -> Self {
        debug_assert_eq!(matrix.rows(), seq1.len() + 1);
        debug_assert_eq!(matrix.cols(), seq2.len() + 1);
        Self {
            matrix,
            seq1: seq1.as_bytes(),
            seq2: seq2.as_bytes(),
            config,
        }
    }

    /// Recovers one optimal alignment.
    ///
    /// Ties are broken in a fixed order: diagonal first, then deletion
    /// (consume `seq1`), then insertion (consume `seq2`). Output on inputs with
    /// several optimal paths is reproducible only under this exact order.
    pub fn reconstruct_alignment(&self) -> AlignedPair {
        let capacity = self.seq1.len() + self.seq2.len();
        let mut aligned_seq1 = Vec::with_capacity(capacity);
        let mut aligned_seq2 = Vec::with_capacity(capacity);
        let mut operations = Vec::with_capacity(capacity);

        let (mut i, mut j) = (self.seq1.len(), self.seq2.len());
        let gap = self.config.gap();

        while i > 0 || j > 0 {
            let current = self.matrix.get(i, j);

            if i > 0 && j > 0 {
                let (a, b) = (self.seq1[i - 1], self.seq2[j - 1]);
                if current == self.matrix.get(i - 1, j - 1) + self.config.substitution(a, b) {
                    aligned_seq1.push(a);
                    aligned_seq2.push(b);
                    operations.push(if a == b {
                        TracebackOperation::Match
                    } else {
                        TracebackOperation::Mismatch
                    });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }

            if i > 0 && current == self.matrix.get(i - 1, j) + gap {
                aligned_seq1.push(self.seq1[i - 1]);
                aligned_seq2.push(GAP);
                operations.push(TracebackOperation::Deletion);
                i -= 1;
            } else {
                // Reached only with j > 0: on column 0 the deletion branch
                // always holds because of the gap boundary.
                aligned_seq1.push(GAP);
                aligned_seq2.push(self.seq2[j - 1]);
                operations.push(TracebackOperation::Insertion);
                j -= 1;
            }
            trace!("Traceback step to ({i}, {j})");
        }

        // Built backwards from the corner
        aligned_seq1.reverse();
        aligned_seq2.reverse();
        operations.reverse();

        AlignedPair {
            aligned_seq1,
            aligned_seq2,
            operations,
        }
    }
}

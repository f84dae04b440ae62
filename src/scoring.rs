use crate::sequence::{Sequence, GAP};
use crate::ScoringConfig;

/// Dense `(m + 1) x (n + 1)` Needleman-Wunsch table, row-major.
///
/// Cell `(i, j)` holds the best score of aligning the first `i` bases of
/// `seq1` against the first `j` bases of `seq2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringMatrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl ScoringMatrix {
    /// Fills the table for `seq1` (rows) against `seq2` (columns).
    ///
    /// Row 0 and column 0 hold pure gap costs. Every inner cell is
    /// `max(diag + substitution, up + gap, left + gap)`, evaluated in row-major
    /// order so its three predecessors are always final.
    pub fn build(seq1: &Sequence, seq2: &Sequence, config: &ScoringConfig) -> Self {
        let (s1, s2) = (seq1.as_bytes(), seq2.as_bytes());
        let rows = s1.len() + 1;
        let cols = s2.len() + 1;
        let gap = config.gap();
        let mut matrix = Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        };

        let mut boundary = 0;
        for i in 0..rows {
            matrix.set(i, 0, boundary);
            boundary += gap;
        }
        boundary = 0;
        for j in 0..cols {
            matrix.set(0, j, boundary);
            boundary += gap;
        }

        for i in 1..rows {
            for j in 1..cols {
                let diagonal = matrix.get(i - 1, j - 1) + config.substitution(s1[i - 1], s2[j - 1]);
                let delete = matrix.get(i - 1, j) + gap;
                let insert = matrix.get(i, j - 1) + gap;
                matrix.set(i, j, diagonal.max(delete).max(insert));
            }
        }

        matrix
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[row * self.cols + col] = value;
    }

    /// Panics if `(row, col)` lies outside the table.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Optimal global score, the bottom-right cell.
    pub fn score(&self) -> i64 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Column counts of a finished alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    /// Gap markers summed over both aligned sequences.
    pub gaps: u32,
    /// `matches / length * 100`, or 0 for an empty alignment.
    pub similarity: f64,
}

impl AlignmentStats {
    /// Counts columns of two equal-length aligned sequences.
    pub fn from_aligned(aligned_seq1: &[u8], aligned_seq2: &[u8]) -> Self {
        debug_assert_eq!(aligned_seq1.len(), aligned_seq2.len());

        let mut stats = aligned_seq1
            .iter()
            .zip(aligned_seq2)
            .fold(AlignmentStats::default(), |mut acc, (&a, &b)| {
                if a == GAP || b == GAP {
                    acc.gaps += u32::from(a == GAP) + u32::from(b == GAP);
                } else if a == b {
                    acc.matches += 1;
                } else {
                    acc.mismatches += 1;
                }
                acc
            });

        let total = aligned_seq1.len();
        stats.similarity = if total == 0 {
            0.0
        } else {
            stats.matches as f64 / total as f64 * 100.0
        };
        stats
    }
}

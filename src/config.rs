use crate::{DNA_GAP, DNA_MATCH, DNA_MISMATCH};

/// Linear scoring scheme. Signs are not checked; any integers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    /// Applied once per gap symbol, no separate open cost.
    pub gap_penalty: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: DNA_MATCH,
            mismatch_penalty: DNA_MISMATCH,
            gap_penalty: DNA_GAP,
        }
    }
}

impl ScoringConfig {
    pub fn new(match_score: i32, mismatch_penalty: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
        }
    }

    pub fn with_match_score(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch_penalty(mut self, mismatch_penalty: i32) -> Self {
        self.mismatch_penalty = mismatch_penalty;
        self
    }

    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    /// Score of placing `a` against `b` in the same column.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i64 {
        if a == b {
            i64::from(self.match_score)
        } else {
            i64::from(self.mismatch_penalty)
        }
    }

    #[inline]
    pub fn gap(&self) -> i64 {
        i64::from(self.gap_penalty)
    }
}

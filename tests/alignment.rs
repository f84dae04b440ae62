use nw_aligner::{
    align, AlignedPair, Aligner, AlignerError, ScoringConfig, ScoringMatrix, Sequence,
    TracebackOperation, GAP,
};
use proptest::prelude::*;

#[test]
fn test_reference_scenario() {
    let result = align("ATGGCCATAGCTAGCT", "ATGCGTAGCTAGCTAGC", ScoringConfig::default()).unwrap();

    assert_eq!(result.aligned_seq1, b"ATG-G-CCATAGCTAGCT");
    assert_eq!(result.aligned_seq2, b"ATGCGTAGCTAGCTAGC-");
    assert_eq!(result.score, 3);
    assert_eq!(result.stats.matches, 12);
    assert_eq!(result.stats.mismatches, 3);
    assert_eq!(result.stats.gaps, 3);
    assert_eq!(result.similarity(), 12.0 / 18.0 * 100.0);
}

#[test]
fn test_reference_scenario_swapped() {
    let result = align("ATGCGTAGCTAGCTAGC", "ATGGCCATAGCTAGCT", ScoringConfig::default()).unwrap();

    assert_eq!(result.aligned_seq1, b"ATGCGTAGCTAGCTAGC-");
    assert_eq!(result.aligned_seq2, b"ATG-G-CCATAGCTAGCT");
    assert_eq!(result.score, 3);
}

#[test]
fn test_invalid_scenario() {
    let err = align("ATGCX", "ATGCGTAGCTAGCTAGC", ScoringConfig::default()).unwrap_err();
    match err {
        AlignerError::InvalidSequence { symbols } => {
            assert_eq!(symbols.into_iter().collect::<Vec<_>>(), vec!['X']);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mixed_case_input() {
    let result = align("gattaca", "GATTACA", ScoringConfig::default()).unwrap();
    assert_eq!(result.aligned_seq1, b"GATTACA");
    assert_eq!(result.stats.similarity, 100.0);
}

#[test]
fn test_empty_against_non_empty() {
    let config = ScoringConfig::default();
    let result = align("", "ACGTA", config).unwrap();

    assert_eq!(result.aligned_seq1, b"-----");
    assert_eq!(result.aligned_seq2, b"ACGTA");
    assert_eq!(result.score, 5 * i64::from(config.gap_penalty));
    assert_eq!(result.stats.gaps, 5);
    assert_eq!(result.similarity(), 0.0);
}

#[test]
fn test_custom_scoring() {
    // A mismatch costs more than two gaps, so the traceback avoids it.
    let result = align("AC", "AG", ScoringConfig::new(2, -10, -1)).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.stats.mismatches, 0);
    assert_eq!(result.stats.gaps, 2);
    assert!(result
        .operations
        .iter()
        .any(|op| matches!(op, TracebackOperation::Insertion | TracebackOperation::Deletion)));
}

fn optimal_score(raw1: &str, raw2: &str, config: &ScoringConfig) -> i64 {
    let seq1 = Sequence::new(raw1).unwrap();
    let seq2 = Sequence::new(raw2).unwrap();
    ScoringMatrix::build(&seq1, &seq2, config).score()
}

fn scoring_config() -> impl Strategy<Value = ScoringConfig> {
    (-3i32..=5, -5i32..=2, -5i32..=1).prop_map(|(m, x, g)| ScoringConfig::new(m, x, g))
}

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&b| b != GAP).collect()
}

proptest! {
    #[test]
    fn test_aligned_lengths(seq1 in "[ACGT]{0,40}", seq2 in "[ACGT]{0,40}", config in scoring_config()) {
        let result = align(&seq1, &seq2, config).unwrap();
        prop_assert_eq!(result.aligned_seq1.len(), result.aligned_seq2.len());
        prop_assert!(result.len() >= seq1.len().max(seq2.len()));
        prop_assert_eq!(result.operations.len(), result.len());
        // Removing gaps gives back the inputs
        prop_assert_eq!(strip_gaps(&result.aligned_seq1), seq1.into_bytes());
        prop_assert_eq!(strip_gaps(&result.aligned_seq2), seq2.into_bytes());
    }

    #[test]
    fn test_score_consistency(seq1 in "[ACGT]{0,40}", seq2 in "[ACGT]{0,40}", config in scoring_config()) {
        let result = align(&seq1, &seq2, config).unwrap();
        let pair = AlignedPair {
            aligned_seq1: result.aligned_seq1.clone(),
            aligned_seq2: result.aligned_seq2.clone(),
            operations: result.operations.clone(),
        };
        prop_assert_eq!(pair.score(&config), result.score);
        prop_assert_eq!(result.score, optimal_score(&seq1, &seq2, &config));
    }

    #[test]
    fn test_score_symmetry(seq1 in "[ACGT]{0,40}", seq2 in "[ACGT]{0,40}", config in scoring_config()) {
        prop_assert_eq!(
            optimal_score(&seq1, &seq2, &config),
            optimal_score(&seq2, &seq1, &config)
        );
    }

    #[test]
    fn test_identity(seq in "[ACGT]{1,60}") {
        let result = Aligner::default().align(&seq, &seq).unwrap();
        prop_assert_eq!(&result.aligned_seq1, seq.as_bytes());
        prop_assert_eq!(&result.aligned_seq2, seq.as_bytes());
        prop_assert_eq!(result.stats.matches as usize, seq.len());
        prop_assert_eq!(result.stats.mismatches, 0);
        prop_assert_eq!(result.stats.gaps, 0);
        prop_assert_eq!(result.similarity(), 100.0);
    }

    #[test]
    fn test_stats_partition_columns(seq1 in "[ACGT]{0,40}", seq2 in "[ACGT]{0,40}") {
        let result = align(&seq1, &seq2, ScoringConfig::default()).unwrap();
        let stats = result.stats;
        // Each gap column carries exactly one gap symbol
        prop_assert_eq!((stats.matches + stats.mismatches + stats.gaps) as usize, result.len());
        prop_assert!((0.0..=100.0).contains(&stats.similarity));
    }
}

use nw_aligner::{BatchAligner, ScoringConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // One worker per CPU
    let mut batch = BatchAligner::new(0, ScoringConfig::default())?;

    let pairs = vec![
        ("ACGTACGT", "ACGTAGCT"),
        ("GGTTAACC", "GGTTAACT"),
        ("GATTACA", "GCATGCT"),
        ("ACGTN", "ACGT"),
    ];

    let results = batch.align_parallel(pairs)?;

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(result) => {
                println!("Alignment {}: Score = {}", i, result.score);
                println!("Sequence 1: {}", String::from_utf8_lossy(&result.aligned_seq1));
                println!("Sequence 2: {}", String::from_utf8_lossy(&result.aligned_seq2));
            }
            Err(e) => println!("Alignment {}: {}", i, e),
        }
        println!();
    }

    Ok(())
}

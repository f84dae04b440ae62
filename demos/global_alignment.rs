use nw_aligner::{Aligner, AlignmentReport, ScoringConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let aligner = Aligner::new(ScoringConfig::default());

    let result = aligner.align("ATGGCCATAGCTAGCT", "ATGCGTAGCTAGCTAGC")?;

    println!("Score: {}", result.score);
    println!("Operations: {:?}", result.operations);
    print!("{}", AlignmentReport::new(&result));

    // Lowercase is accepted, anything outside A/T/G/C is not
    println!("Testing invalid sequence:");
    if let Err(e) = aligner.align("ATGCX", "ATGCGTAGCTAGCTAGC") {
        println!("Error: {e}");
    }

    Ok(())
}

use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};
use nw_aligner::{align, AlignmentReport, ScoringConfig, DNA_GAP, DNA_MATCH, DNA_MISMATCH};

#[derive(Parser)]
#[command(name = "nw-align")]
#[command(about = "Global pairwise DNA alignment (Needleman-Wunsch)")]
#[command(version)]
struct Cli {
    /// First sequence (A, T, G, C; case-insensitive)
    #[arg(default_value = "ATGGCCATAGCTAGCT")]
    seq1: String,

    /// Second sequence
    #[arg(default_value = "ATGCGTAGCTAGCTAGC")]
    seq2: String,

    /// Score added for two equal bases
    #[arg(long, default_value_t = DNA_MATCH, allow_hyphen_values = true)]
    match_score: i32,

    /// Score added for two different bases
    #[arg(long, default_value_t = DNA_MISMATCH, allow_hyphen_values = true)]
    mismatch_penalty: i32,

    /// Score added per gap symbol
    #[arg(long, default_value_t = DNA_GAP, allow_hyphen_values = true)]
    gap_penalty: i32,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = ScoringConfig::new(cli.match_score, cli.mismatch_penalty, cli.gap_penalty);

    match align(&cli.seq1, &cli.seq2, config) {
        Ok(result) => {
            println!("DNA Sequence Alignment Results:");
            print!("{}", AlignmentReport::new(&result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Alignment failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

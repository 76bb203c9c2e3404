//! encode_dataset - turns `fen;uci;result` rows into a bincode file of training samples.
//!
//! ```bash
//! RUST_LOG=info cargo run --release --bin encode_dataset -- \
//!   --input positions.txt --output samples.bin --shuffle --seed 42 --threads 8
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::str::FromStr;
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use chess_planes::encoding::{build_training_sample, Outcome, TrainingSample};
use chess_planes::r#move::Move;
use chess_planes::rules::ChessPosition;
use chess_planes::CodecError;

const COMMENT_PREFIX: char = '#';
const FIELD_SEPARATOR: char = ';';

/// Encode a text dataset of positions, played moves and game results for training
#[derive(Parser)]
#[command(name = "encode_dataset", version)]
struct Cli {
    /// Input file, one `fen;uci;result` row per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output bincode file
    #[arg(short, long)]
    output: PathBuf,

    /// Shuffle samples before writing
    #[arg(long)]
    shuffle: bool,

    /// Seed for the shuffle (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (0 = rayon default)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Log and skip invalid rows instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

struct Row {
    line_number: usize,
    text: String,
}

fn parse_row(text: &str) -> Result<(ChessPosition, Move, Outcome), CodecError> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [fen, uci, result] = fields.as_slice() else {
        return Err(CodecError::ContractViolation(format!(
            "expected 3 fields separated by '{}', found {}", FIELD_SEPARATOR, fields.len()
        )));
    };
    Ok((ChessPosition::from_fen(fen)?, Move::from_uci(uci)?, Outcome::from_str(result)?))
}

fn encode_row(row: &Row) -> Result<TrainingSample, CodecError> {
    let (position, mv, outcome) = parse_row(&row.text)?;
    build_training_sample(&position, mv, outcome)
}

fn read_rows(cli: &Cli) -> Result<Vec<Row>> {
    let file = File::open(&cli.input).with_context(|| format!("failed to open {}", cli.input.display()))?;
    let mut rows = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        let text = line.trim();
        if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
            continue;
        }
        rows.push(Row { line_number: index + 1, text: text.to_string() });
    }
    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("input file not found: {}", cli.input.display());
    }

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let rows = read_rows(&cli)?;
    info!("read {} rows from {}", rows.len(), cli.input.display());

    let results: Vec<Result<TrainingSample, CodecError>> = rows.par_iter().map(encode_row).collect();

    let mut samples = Vec::with_capacity(results.len());
    let mut num_skipped = 0;
    for (row, result) in rows.iter().zip(results) {
        match result {
            Ok(sample) => samples.push(sample),
            Err(err) if cli.skip_invalid => {
                warn!("skipping line {}: {}", row.line_number, err);
                num_skipped += 1;
            }
            Err(err) => bail!("line {}: {}", row.line_number, err),
        }
    }

    if cli.shuffle {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        samples.shuffle(&mut rng);
    }

    let file = File::create(&cli.output).with_context(|| format!("failed to create {}", cli.output.display()))?;
    bincode::serialize_into(BufWriter::new(file), &samples).context("failed to write samples")?;

    info!("wrote {} samples to {} ({} skipped)", samples.len(), cli.output.display(), num_skipped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        let (position, mv, outcome) =
            parse_row("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1; e2e4 ;1-0").unwrap();
        assert_eq!(position, ChessPosition::initial());
        assert_eq!(mv.uci(), "e2e4");
        assert_eq!(outcome, Outcome::WhiteWins);
    }

    #[test]
    fn test_parse_row_errors() {
        assert!(matches!(parse_row("only one field"), Err(CodecError::ContractViolation(_))));
        assert!(matches!(parse_row("not a fen;e2e4;1-0"), Err(CodecError::InvalidFen(_))));
        assert!(matches!(
            parse_row("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1;e2e4;2-0"),
            Err(CodecError::UnknownOutcome(_))
        ));
    }

    #[test]
    fn test_illegal_move_is_invalid_row() {
        let row = Row {
            line_number: 1,
            text: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1;e2e5;0-1".to_string(),
        };
        assert!(matches!(encode_row(&row), Err(CodecError::InvalidMove(_))));
    }
}

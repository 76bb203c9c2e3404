//! Batched encoding and decoding. Items are processed in parallel and results keep
//! the input order.

use log::debug;
use rayon::prelude::*;
use crate::board::Board;
use crate::encoding::constants::{DECODE_BUFFER_CAPACITY, NUM_OUTPUT_POLICY_MOVES};
use crate::encoding::outcome::Outcome;
use crate::encoding::policy::decode_policy_padded;
use crate::encoding::samples::{build_inference_sample, build_training_sample, InferenceSample, TrainingSample};
use crate::error::{CodecError, Result};
use crate::r#move::Move;
use crate::utils::Color;

/// Builds one training sample per `(board, move, outcome)` triple.
/// The first failing item aborts the whole batch.
pub fn encode_training_batch<B: Board + Sync>(items: &[(B, Move, Outcome)]) -> Result<Vec<TrainingSample>> {
    debug!("encoding training batch of {} positions", items.len());
    items
        .par_iter()
        .map(|(board, mv, outcome)| build_training_sample(board, *mv, *outcome))
        .collect()
}

pub fn encode_inference_batch<B: Board + Sync>(items: &[(B, Color)]) -> Result<Vec<InferenceSample>> {
    debug!("encoding inference batch of {} positions", items.len());
    items
        .par_iter()
        .map(|(board, perspective)| build_inference_sample(board, *perspective))
        .collect()
}

/// Decodes a `[batch, 4608]` row-major policy matrix, one zero-padded row per board.
pub fn decode_policy_batch<B: Board + Sync>(boards: &[B], raw_policies: &[f32]) -> Result<Vec<[f32; DECODE_BUFFER_CAPACITY]>> {
    let expected = boards.len() * NUM_OUTPUT_POLICY_MOVES;
    if raw_policies.len() != expected {
        return Err(CodecError::ContractViolation(format!(
            "policy batch has {} entries, expected {} for {} boards", raw_policies.len(), expected, boards.len()
        )));
    }

    debug!("decoding policy batch of {} positions", boards.len());
    boards
        .par_iter()
        .zip(raw_policies.par_chunks(NUM_OUTPUT_POLICY_MOVES))
        .map(|(board, raw_policy)| decode_policy_padded(board, raw_policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::policy::decode_policy;
    use crate::encoding::test_boards::ListedBoard;
    use crate::rules::ChessPosition;

    fn opening_positions() -> Vec<ChessPosition> {
        let mut positions = vec![ChessPosition::initial()];
        for uci in ["e2e4", "c7c5", "g1f3", "d7d6", "d2d4"] {
            let last = positions[positions.len() - 1];
            positions.push(last.play(Move::from_uci(uci).unwrap()).unwrap());
        }
        positions
    }

    #[test]
    fn test_training_batch_matches_single_samples() {
        let positions = opening_positions();
        let items: Vec<(ChessPosition, Move, Outcome)> = positions
            .iter()
            .zip(["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4"])
            .map(|(position, uci)| (*position, Move::from_uci(uci).unwrap(), Outcome::Draw))
            .collect();

        let batch = encode_training_batch(&items).unwrap();
        assert_eq!(batch.len(), items.len());
        for ((position, mv, outcome), sample) in items.iter().zip(&batch) {
            assert_eq!(*sample, build_training_sample(position, *mv, *outcome).unwrap());
        }
    }

    #[test]
    fn test_training_batch_fails_on_any_bad_item() {
        let position = ChessPosition::initial();
        let items = vec![
            (position, Move::from_uci("e2e4").unwrap(), Outcome::WhiteWins),
            (position, Move::from_uci("e2e5").unwrap(), Outcome::WhiteWins),
        ];
        assert!(matches!(encode_training_batch(&items), Err(CodecError::InvalidMove(_))));
    }

    #[test]
    fn test_inference_batch_keeps_order() {
        let items: Vec<(ChessPosition, Color)> = opening_positions()
            .into_iter()
            .map(|position| (position, Color::Black))
            .collect();
        let batch = encode_inference_batch(&items).unwrap();
        for ((position, perspective), sample) in items.iter().zip(&batch) {
            assert_eq!(*sample, build_inference_sample(position, *perspective).unwrap());
        }
    }

    #[test]
    fn test_decode_policy_batch() {
        let positions = opening_positions();
        let raw_policies: Vec<f32> = (0..positions.len() * NUM_OUTPUT_POLICY_MOVES)
            .map(|i| (i % 97) as f32)
            .collect();

        let rows = decode_policy_batch(&positions, &raw_policies).unwrap();
        assert_eq!(rows.len(), positions.len());
        for (i, (position, row)) in positions.iter().zip(&rows).enumerate() {
            let raw_policy = &raw_policies[i * NUM_OUTPUT_POLICY_MOVES..(i + 1) * NUM_OUTPUT_POLICY_MOVES];
            let expected = decode_policy(position, raw_policy).unwrap();
            assert_eq!(&row[..expected.len()], expected.as_slice());
            assert!(row[expected.len()..].iter().all(|&p| p == 0.));
        }
    }

    #[test]
    fn test_decode_policy_batch_errors() {
        let positions = opening_positions();
        assert!(matches!(
            decode_policy_batch(&positions, &vec![0.; NUM_OUTPUT_POLICY_MOVES]),
            Err(CodecError::ContractViolation(_))
        ));

        let boards = vec![
            ListedBoard::with_queen_moves(Color::White, 3),
            ListedBoard::with_queen_moves(Color::White, DECODE_BUFFER_CAPACITY + 1),
        ];
        assert!(matches!(
            decode_policy_batch(&boards, &vec![0.; 2 * NUM_OUTPUT_POLICY_MOVES]),
            Err(CodecError::BufferOverflow { .. })
        ));
    }
}

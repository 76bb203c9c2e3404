use log::trace;
use serde::{Deserialize, Serialize};
use crate::board::Board;
use crate::encoding::move_mask::{legal_move_mask, LegalMoveMask};
use crate::encoding::outcome::Outcome;
use crate::encoding::perspective::{canonicalize, mirror_board};
use crate::encoding::policy_index::PolicyIndex;
use crate::encoding::position::{encode_position, PositionPlanes};
use crate::error::{CodecError, Result};
use crate::r#move::Move;
use crate::utils::Color;

/// One supervised example, always expressed with white to move.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TrainingSample {
    pub position: PositionPlanes,
    /// Flattened policy index of the played move.
    pub move_index: usize,
    pub outcome: Outcome,
    pub legal_move_mask: LegalMoveMask,
}

impl TrainingSample {
    /// The value head target: 1 for a win of the side to move, -1 for a loss, 0 for a draw.
    pub const fn value_target(&self) -> f32 {
        self.outcome.value()
    }
}

/// Network input for a position that is about to be evaluated.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InferenceSample {
    pub position: PositionPlanes,
    pub legal_move_mask: LegalMoveMask,
}

/// Encodes a played move and the final game result for training.
///
/// The board, the move and the outcome are mirrored together when black is to move.
/// The move must be legal in `board`.
pub fn build_training_sample<B: Board>(board: &B, mv: Move, outcome: Outcome) -> Result<TrainingSample> {
    let canonical = canonicalize(board, Some(mv), Some(outcome))?;
    let (Some(canonical_move), Some(canonical_outcome)) = (canonical.mv, canonical.outcome) else {
        return Err(CodecError::ContractViolation("canonicalization dropped the move or outcome".to_string()));
    };

    let legal_move_mask = legal_move_mask(&*canonical.board)?;
    let move_index = PolicyIndex::calc(&canonical_move)?.packed();
    if !legal_move_mask.contains(move_index) {
        return Err(CodecError::InvalidMove(format!("{} is not legal in this position", mv)));
    }

    Ok(TrainingSample {
        position: encode_position(&*canonical.board),
        move_index,
        outcome: canonical_outcome,
        legal_move_mask,
    })
}

/// Encodes a position for inference as seen by `perspective`.
///
/// The board is mirrored only when the perspective is black and black is to move.
/// In every other case the board is encoded as given.
pub fn build_inference_sample<B: Board>(board: &B, perspective: Color) -> Result<InferenceSample> {
    if perspective == Color::Black && board.side_to_move() == Color::Black {
        trace!("mirroring board for black's perspective");
        let mirrored = mirror_board(board)?;
        return Ok(InferenceSample {
            position: encode_position(&mirrored),
            legal_move_mask: legal_move_mask(&mirrored)?,
        });
    }

    Ok(InferenceSample {
        position: encode_position(board),
        legal_move_mask: legal_move_mask(board)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::constants::{KINGSIDE_OWN_PLANE, NUM_OUTPUT_POLICY_MOVES};
    use crate::encoding::position::piece_plane;
    use crate::rules::ChessPosition;
    use crate::utils::PieceType;

    #[test]
    fn test_training_sample_initial_position() {
        let position = ChessPosition::initial();
        let sample = build_training_sample(&position, Move::from_uci("e2e4").unwrap(), Outcome::WhiteWins).unwrap();

        assert_eq!(sample.move_index, 1164);
        assert_eq!(sample.outcome, Outcome::WhiteWins);
        assert_eq!(sample.value_target(), 1.);
        assert_eq!(sample.position, encode_position(&position));
        assert_eq!(sample.legal_move_mask.count_ones(), 20);
        assert_eq!(sample.legal_move_mask.as_slice()[sample.move_index], 1);
    }

    #[test]
    fn test_training_sample_black_to_move_is_mirrored() {
        let position = ChessPosition::initial().play(Move::from_uci("e2e4").unwrap()).unwrap();
        let sample = build_training_sample(&position, Move::from_uci("e7e5").unwrap(), Outcome::BlackWins).unwrap();

        // e7e5 seen from black's side is e2e4
        assert_eq!(sample.move_index, 1164);
        assert_eq!(sample.outcome, Outcome::WhiteWins);
        assert_eq!(sample.value_target(), 1.);
        assert_eq!(sample.legal_move_mask.as_slice()[sample.move_index], 1);
        assert_eq!(sample.legal_move_mask.count_ones(), 20);

        // black's untouched pawns land on the second rank of the own-pawn plane
        let own_pawns = piece_plane(PieceType::Pawn, Color::White);
        assert_eq!(sample.position.plane_sum(own_pawns), 8.);
        assert_eq!(sample.position.get(own_pawns, 1, 4), 1.);
        // white's e-pawn already stands on e4, which is e5 after mirroring
        let opponent_pawns = piece_plane(PieceType::Pawn, Color::Black);
        assert_eq!(sample.position.get(opponent_pawns, 4, 4), 1.);
        assert_eq!(sample.position.plane_sum(KINGSIDE_OWN_PLANE), 64.);
    }

    #[test]
    fn test_training_sample_draw_stays_draw() {
        let position = ChessPosition::initial().play(Move::from_uci("g1f3").unwrap()).unwrap();
        let sample = build_training_sample(&position, Move::from_uci("g8f6").unwrap(), Outcome::Draw).unwrap();
        assert_eq!(sample.outcome, Outcome::Draw);
        assert_eq!(sample.value_target(), 0.);
        assert_eq!(sample.move_index, PolicyIndex::calc(&Move::from_uci("g1f3").unwrap()).unwrap().packed());
    }

    #[test]
    fn test_training_sample_rejects_illegal_move() {
        let position = ChessPosition::initial();
        assert!(matches!(
            build_training_sample(&position, Move::from_uci("e2e5").unwrap(), Outcome::Draw),
            Err(CodecError::InvalidMove(_))
        ));
        assert!(matches!(
            build_training_sample(&position, Move::from_uci("a1c4").unwrap(), Outcome::Draw),
            Err(CodecError::UnknownMoveShape { .. })
        ));
    }

    #[test]
    fn test_inference_sample_perspective() {
        let white_to_move = ChessPosition::initial();
        let black_to_move = white_to_move.play(Move::from_uci("e2e4").unwrap()).unwrap();

        // only black's perspective with black to move is mirrored
        let sample = build_inference_sample(&black_to_move, Color::Black).unwrap();
        assert_eq!(sample.position, encode_position(&black_to_move.mirror()));
        assert_eq!(sample.legal_move_mask, legal_move_mask(&black_to_move.mirror()).unwrap());

        let sample = build_inference_sample(&black_to_move, Color::White).unwrap();
        assert_eq!(sample.position, encode_position(&black_to_move));

        let sample = build_inference_sample(&white_to_move, Color::Black).unwrap();
        assert_eq!(sample.position, encode_position(&white_to_move));
        let sample = build_inference_sample(&white_to_move, Color::White).unwrap();
        assert_eq!(sample.position, encode_position(&white_to_move));
        assert_eq!(sample.legal_move_mask.as_slice().len(), NUM_OUTPUT_POLICY_MOVES);
    }
}

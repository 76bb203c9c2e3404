//! Color canonicalization: every sample is expressed with white to move.

use std::borrow::Cow;
use log::trace;
use crate::board::Board;
use crate::encoding::constants::CANONICAL_SIDE;
use crate::encoding::outcome::Outcome;
use crate::error::{CodecError, Result};
use crate::r#move::Move;
use crate::utils::Square;

pub const fn mirror_square(square: Square) -> Square {
    square.mirrored()
}

pub const fn mirror_move(mv: Move) -> Move {
    mv.mirrored()
}

/// Whether the board must be mirrored to reach canonical orientation.
pub fn needs_mirroring<B: Board>(board: &B) -> bool {
    board.side_to_move() != CANONICAL_SIDE
}

/// Mirrors a board, checking that the rules engine handed the move to the other side.
pub fn mirror_board<B: Board>(board: &B) -> Result<B> {
    let mirrored = board.mirror();
    if mirrored.side_to_move() == board.side_to_move() {
        return Err(CodecError::ContractViolation(
            "mirroring the board did not change the side to move".to_string(),
        ));
    }
    Ok(mirrored)
}

/// A board with its optional move and outcome, all in canonical orientation.
/// The three are mirrored together or not at all.
pub struct Canonical<'a, B: Board> {
    pub board: Cow<'a, B>,
    pub mv: Option<Move>,
    pub outcome: Option<Outcome>,
    pub mirrored: bool,
}

pub fn canonicalize<'a, B: Board>(board: &'a B, mv: Option<Move>, outcome: Option<Outcome>) -> Result<Canonical<'a, B>> {
    if !needs_mirroring(board) {
        return Ok(Canonical { board: Cow::Borrowed(board), mv, outcome, mirrored: false });
    }

    trace!("mirroring board to canonical orientation");
    Ok(Canonical {
        board: Cow::Owned(mirror_board(board)?),
        mv: mv.map(mirror_move),
        outcome: outcome.map(|outcome| outcome.negated()),
        mirrored: true,
    })
}

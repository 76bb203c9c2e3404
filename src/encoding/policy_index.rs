use crate::encoding::constants::{BOARD_SIZE, NUM_MOVE_PLANES, NUM_OUTPUT_POLICY_MOVES, NUM_QUEEN_LIKE_PLANES, NUM_SQUARES, PLANES_PER_DIRECTION};
use crate::error::{CodecError, Result};
use crate::r#move::Move;
use crate::utils::{KnightMoveDirection, QueenLikeMoveDirection};

/// The geometric class of a move: a straight or diagonal ray, or a knight jump.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveShape {
    QueenLike { direction: QueenLikeMoveDirection, distance: u8 },
    Knight(KnightMoveDirection),
}

impl MoveShape {
    /// Classifies a move by its displacement. Anything that is not a ray or a knight
    /// jump (including a null move) is rejected.
    pub fn calc(mv: &Move) -> Result<MoveShape> {
        let (file_diff, rank_diff) = mv.get_diff();

        if let Some((direction, distance)) = QueenLikeMoveDirection::calc_and_measure_distance(file_diff, rank_diff) {
            return Ok(MoveShape::QueenLike { direction, distance });
        }

        KnightMoveDirection::calc(file_diff, rank_diff)
            .map(MoveShape::Knight)
            .ok_or(CodecError::UnknownMoveShape { file_diff, rank_diff })
    }

    /// Maps the shape to one of the 72 move planes.
    /// Queen-like moves use `8 * direction + distance` (distance 1-7), knight jumps use 64-71.
    pub const fn plane(&self) -> u8 {
        match self {
            MoveShape::QueenLike { direction, distance } => *direction as u8 * PLANES_PER_DIRECTION + *distance,
            MoveShape::Knight(direction) => NUM_QUEEN_LIKE_PLANES + *direction as u8,
        }
    }
}

/// Location of a move in the `[72, 8, 8]` policy tensor.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PolicyIndex {
    pub plane: u8,
    pub source_rank: u8,
    pub source_file: u8,
}

impl PolicyIndex {
    pub fn calc(mv: &Move) -> Result<Self> {
        let plane = MoveShape::calc(mv)?.plane();
        let source = mv.get_source();
        Ok(PolicyIndex {
            plane,
            source_rank: source.get_rank(),
            source_file: source.get_file(),
        })
    }

    /// Flattened index into the 4608-entry policy vector.
    pub const fn packed(&self) -> usize {
        pack_index(self.plane, self.source_rank, self.source_file)
    }

    /// Splits a flattened index back into plane, rank and file.
    pub fn unpack(index: usize) -> Result<Self> {
        if index >= NUM_OUTPUT_POLICY_MOVES {
            return Err(CodecError::ContractViolation(format!(
                "policy index {} is outside [0, {})", index, NUM_OUTPUT_POLICY_MOVES
            )));
        }
        let square = index % NUM_SQUARES;
        Ok(PolicyIndex {
            plane: (index / NUM_SQUARES) as u8,
            source_rank: (square / BOARD_SIZE) as u8,
            source_file: (square % BOARD_SIZE) as u8,
        })
    }
}

pub const fn pack_index(plane: u8, source_rank: u8, source_file: u8) -> usize {
    plane as usize * NUM_SQUARES + source_rank as usize * BOARD_SIZE + source_file as usize
}

/// Maps a move to its plane and source coordinates.
pub fn move_to_index(mv: &Move) -> Result<PolicyIndex> {
    PolicyIndex::calc(mv)
}

const _: () = assert!(NUM_MOVE_PLANES * NUM_SQUARES == NUM_OUTPUT_POLICY_MOVES);

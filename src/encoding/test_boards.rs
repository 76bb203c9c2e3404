//! Minimal `Board` implementations for exercising edge cases no real position reaches.

use crate::board::{Board, CastlingRights};
use crate::r#move::Move;
use crate::utils::{Bitboard, Color, PieceType, QueenLikeMoveDirection, Square};

/// An empty board with an explicit list of legal moves.
#[derive(Clone, Debug, PartialEq)]
pub struct ListedBoard {
    side_to_move: Color,
    moves: Vec<Move>,
}

impl ListedBoard {
    pub fn new(side_to_move: Color, moves: Vec<Move>) -> Self {
        ListedBoard { side_to_move, moves }
    }

    /// `count` distinct ray moves, taken square by square from a1 upwards.
    pub fn with_queen_moves(side_to_move: Color, count: usize) -> Self {
        let mut moves = Vec::with_capacity(count);
        'outer: for source in Square::iter_all() {
            for direction in QueenLikeMoveDirection::iter() {
                let (file_step, rank_step) = direction.delta();
                for distance in 1..=7i8 {
                    let rank = source.get_rank() as i8 + rank_step * distance;
                    let file = source.get_file() as i8 + file_step * distance;
                    if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                        break;
                    }
                    if moves.len() == count {
                        break 'outer;
                    }
                    if let Some(destination) = Square::from_rank_file(rank as u8, file as u8) {
                        moves.push(Move::new(source, destination));
                    }
                }
            }
        }
        ListedBoard { side_to_move, moves }
    }
}

impl Board for ListedBoard {
    fn pieces(&self, _piece_type: PieceType, _color: Color) -> Bitboard {
        0
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn castling_rights(&self) -> CastlingRights {
        CastlingRights::NONE
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.moves.clone()
    }

    fn mirror(&self) -> Self {
        ListedBoard {
            side_to_move: self.side_to_move.flip(),
            moves: self.moves.iter().map(Move::mirrored).collect(),
        }
    }
}

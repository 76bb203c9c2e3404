//! The narrow view of a rules engine that the codec needs.

use crate::r#move::Move;
use crate::utils::{Bitboard, Color, PieceType};

/// The four castling rights of a position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const fn has_kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub const fn has_queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// The rights after the colors swap sides.
    pub const fn mirrored(&self) -> CastlingRights {
        CastlingRights {
            white_kingside: self.black_kingside,
            white_queenside: self.black_queenside,
            black_kingside: self.white_kingside,
            black_queenside: self.white_queenside,
        }
    }
}

/// A position supplied by an external rules engine. Implementations are immutable values.
pub trait Board: Clone {
    /// Squares occupied by pieces of the given type and color.
    fn pieces(&self, piece_type: PieceType, color: Color) -> Bitboard;

    fn side_to_move(&self) -> Color;

    fn castling_rights(&self) -> CastlingRights;

    /// All legal moves, in an order that is stable across calls.
    fn legal_moves(&self) -> Vec<Move>;

    /// The position reflected top-to-bottom with the colors swapped, so the side to move changes.
    fn mirror(&self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_rights() {
        let rights = CastlingRights { white_kingside: true, black_queenside: true, ..CastlingRights::NONE };
        assert!(rights.has_kingside(Color::White));
        assert!(!rights.has_queenside(Color::White));
        assert!(!rights.has_kingside(Color::Black));
        assert!(rights.has_queenside(Color::Black));

        let mirrored = rights.mirrored();
        assert!(mirrored.has_kingside(Color::Black));
        assert!(mirrored.has_queenside(Color::White));
        assert_eq!(mirrored.mirrored(), rights);
        assert_eq!(CastlingRights::ALL.mirrored(), CastlingRights::ALL);
        assert_eq!(CastlingRights::default(), CastlingRights::NONE);
    }
}

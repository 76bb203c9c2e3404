use serde::{Deserialize, Serialize};
use crate::error::CodecError;
use crate::utils::Square;

/// Represents a move as an ordered pair of squares.
/// Promotions are not part of the move; a pawn push to the last rank is just its two squares.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    source: Square,
    destination: Square,
}

impl Move {
    /// Creates a new move.
    pub const fn new(source: Square, destination: Square) -> Move {
        Move { source, destination }
    }

    /// Gets the source square of the move.
    pub const fn get_source(&self) -> Square {
        self.source
    }

    /// Gets the destination square of the move.
    pub const fn get_destination(&self) -> Square {
        self.destination
    }

    /// Returns the `(file_diff, rank_diff)` displacement of the move.
    pub const fn get_diff(&self) -> (i8, i8) {
        (
            self.destination.get_file() as i8 - self.source.get_file() as i8,
            self.destination.get_rank() as i8 - self.source.get_rank() as i8,
        )
    }

    /// The same move reflected top-to-bottom.
    pub const fn mirrored(&self) -> Move {
        Move::new(self.source.mirrored(), self.destination.mirrored())
    }

    /// Returns the UCI (Universal Chess Interface) representation of the move.
    pub fn uci(&self) -> String {
        format!("{}{}", self.source.readable(), self.destination.readable())
    }

    /// Parses a UCI move such as `e2e4`. A trailing promotion letter is accepted and dropped.
    pub fn from_uci(uci: &str) -> Result<Move, CodecError> {
        let invalid = || CodecError::InvalidMove(uci.to_string());
        let uci = uci.trim();
        let (squares, promotion) = match uci.len() {
            4 => (uci, None),
            5 => (uci.get(..4).ok_or_else(invalid)?, uci.get(4..)),
            _ => return Err(invalid()),
        };
        if let Some(promotion) = promotion {
            if !matches!(promotion, "q" | "r" | "b" | "n") {
                return Err(invalid());
            }
        }
        let source = squares.get(..2).and_then(Square::from_readable).ok_or_else(invalid)?;
        let destination = squares.get(2..).and_then(Square::from_readable).ok_or_else(invalid)?;
        Ok(Move::new(source, destination))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uci())
    }
}

impl std::fmt::Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

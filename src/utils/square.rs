use std::fmt::Display;
use serde::{Deserialize, Serialize};
use crate::utils::Bitboard;

const FILE_CHARS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the 8x8 board, numbered rank-major from a1 (0) to h8 (63).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const E2: Square = Square(12);
    pub const E4: Square = Square(28);
    pub const E7: Square = Square(52);
    pub const E8: Square = Square(60);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);

    /// Returns the square with the given number, or `None` if it is off the board.
    pub const fn new(square_number: u8) -> Option<Square> {
        if square_number < 64 {
            Some(Square(square_number))
        } else {
            None
        }
    }

    /// Builds a square from the low six bits of `square_number`.
    pub const fn from_masked(square_number: u8) -> Square {
        Square(square_number & 63)
    }

    pub const fn from_rank_file(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    pub const fn index(&self) -> u8 {
        self.0
    }

    pub const fn to_mask(&self) -> Bitboard {
        1 << self.0
    }

    pub const fn get_rank(&self) -> u8 {
        self.0 / 8
    }

    pub const fn get_file(&self) -> u8 {
        self.0 % 8
    }

    /// Reflects the square top-to-bottom: the rank becomes `7 - rank`, the file is kept.
    pub const fn mirrored(&self) -> Square {
        Square(self.0 ^ 56)
    }

    pub const fn get_file_char(&self) -> char {
        FILE_CHARS[self.get_file() as usize]
    }

    pub const fn get_rank_char(&self) -> char {
        (b'1' + self.get_rank()) as char
    }

    pub fn readable(&self) -> String {
        format!("{}{}", self.get_file_char(), self.get_rank_char())
    }

    /// Parses an algebraic square name such as `e4`.
    pub fn from_readable(name: &str) -> Option<Square> {
        let mut chars = name.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Square::from_rank_file(rank as u8 - b'1', file as u8 - b'a')
    }

    pub fn iter_all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.readable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A8.index(), 56);
        assert_eq!(Square::H8.index(), 63);
        assert_eq!(Square::new(64), None);
        assert_eq!(Square::from_rank_file(1, 4), Some(Square::E2));
    }

    #[test]
    fn test_rank_and_file() {
        assert_eq!(Square::E2.get_rank(), 1);
        assert_eq!(Square::E2.get_file(), 4);
        for square in Square::iter_all() {
            assert_eq!(Square::from_rank_file(square.get_rank(), square.get_file()), Some(square));
        }
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(Square::E2.mirrored(), Square::E7);
        assert_eq!(Square::E2.mirrored().index(), 52);
        for square in Square::iter_all() {
            assert_eq!(square.mirrored().mirrored(), square);
            assert_eq!(square.mirrored().get_rank(), 7 - square.get_rank());
            assert_eq!(square.mirrored().get_file(), square.get_file());
        }
    }

    #[test]
    fn test_readable() {
        assert_eq!(Square::E4.readable(), "e4");
        assert_eq!(Square::from_readable("e4"), Some(Square::E4));
        assert_eq!(Square::from_readable("h8"), Some(Square::H8));
        assert_eq!(Square::from_readable("i1"), None);
        assert_eq!(Square::from_readable("a9"), None);
        assert_eq!(Square::from_readable("a1x"), None);
        for square in Square::iter_all() {
            assert_eq!(Square::from_readable(&square.readable()), Some(square));
        }
    }
}

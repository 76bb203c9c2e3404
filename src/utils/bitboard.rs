use crate::utils::Square;

pub type Bitboard = u64;

#[derive(Debug, Clone)]
pub struct SquaresFromMaskIterator {
    mask: Bitboard,
}

impl From<Bitboard> for SquaresFromMaskIterator {
    fn from(mask: Bitboard) -> Self {
        SquaresFromMaskIterator {
            mask,
        }
    }
}

impl Iterator for SquaresFromMaskIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == 0 {
            return None;
        }

        let square_index = self.mask.trailing_zeros();  // Index of the least significant set bit
        self.mask &= self.mask - 1;  // Clear the least significant set bit

        Square::new(square_index as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.mask.count_ones() as usize;
        (count, Some(count))
    }
}

pub fn get_squares_from_mask_iter(mask: Bitboard) -> SquaresFromMaskIterator {
    mask.into()
}

/// Reflects a bitboard top-to-bottom, mapping every square to its mirrored square.
pub const fn flip_vertical(mask: Bitboard) -> Bitboard {
    mask.swap_bytes()
}

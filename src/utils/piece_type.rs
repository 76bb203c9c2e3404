#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    Pawn=0,
    Rook=1,
    Bishop=2,
    Knight=3,
    Queen=4,
    King=5
}

/// All piece types, in the order their occupancy planes are laid out.
const ALL_PIECES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Queen,
    PieceType::King
];

impl PieceType {
    pub const LIMIT: usize = 6;

    pub fn iter_pieces() -> impl Iterator<Item = PieceType> {
        ALL_PIECES.into_iter()
    }

    pub const fn to_char(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_order() {
        let order: Vec<u8> = PieceType::iter_pieces().map(|p| p as u8).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(PieceType::iter_pieces().count(), PieceType::LIMIT);
    }

    #[test]
    fn test_to_char() {
        let chars: String = PieceType::iter_pieces().map(|p| p.to_char()).collect();
        assert_eq!(chars, "prbnqk");
    }
}

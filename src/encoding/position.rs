use serde::{Deserialize, Serialize};
use crate::board::{Board, CastlingRights};
use crate::encoding::constants::{BOARD_SIZE, KINGSIDE_OPPONENT_PLANE, KINGSIDE_OWN_PLANE, NUM_COLOR_BITS, NUM_POSITION_BITS, NUM_SQUARES, QUEENSIDE_OPPONENT_PLANE, QUEENSIDE_OWN_PLANE};
use crate::utils::{get_squares_from_mask_iter, Color, PieceType, Square};

/// A `[16, 8, 8]` row-major tensor of 0.0 / 1.0 values describing a position.
///
/// Planes 0-11 hold piece occupancy in (own, opponent) pairs per piece type, in the
/// order pawn, rook, bishop, knight, queen, king. Planes 12-15 are the castling rights
/// (kingside own, kingside opponent, queenside own, queenside opponent), each either
/// all ones or all zeros.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PositionPlanes {
    data: Vec<f32>,
}

impl PositionPlanes {
    pub const SHAPE: [usize; 3] = [NUM_POSITION_BITS, BOARD_SIZE, BOARD_SIZE];

    pub fn zeros() -> Self {
        PositionPlanes { data: vec![0.; NUM_POSITION_BITS * NUM_SQUARES] }
    }

    pub fn get(&self, plane: usize, rank: u8, file: u8) -> f32 {
        self.data[plane * NUM_SQUARES + rank as usize * BOARD_SIZE + file as usize]
    }

    fn set_square(&mut self, plane: usize, square: Square) {
        self.data[plane * NUM_SQUARES + square.index() as usize] = 1.;
    }

    fn fill_plane(&mut self, plane: usize) {
        self.data[plane * NUM_SQUARES..(plane + 1) * NUM_SQUARES].fill(1.);
    }

    /// The 64 values of one plane, rank-major from a1.
    pub fn plane(&self, plane: usize) -> &[f32] {
        &self.data[plane * NUM_SQUARES..(plane + 1) * NUM_SQUARES]
    }

    pub fn plane_sum(&self, plane: usize) -> f32 {
        self.plane(plane).iter().sum()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// Plane index of the given piece type and color. White is "own" because boards are
/// canonicalized to white-to-move before encoding.
pub const fn piece_plane(piece_type: PieceType, color: Color) -> usize {
    piece_type as usize * NUM_COLOR_BITS + color as usize
}

/// Fills the occupancy planes for a given color's pieces.
fn fill_pieces_for_color<B: Board>(planes: &mut PositionPlanes, board: &B, color: Color) {
    for piece_type in PieceType::iter_pieces() {
        let plane = piece_plane(piece_type, color);
        for square in get_squares_from_mask_iter(board.pieces(piece_type, color)) {
            planes.set_square(plane, square);
        }
    }
}

fn fill_castling_rights(planes: &mut PositionPlanes, castling_rights: CastlingRights) {
    let rights = [
        (castling_rights.has_kingside(Color::White), KINGSIDE_OWN_PLANE),
        (castling_rights.has_kingside(Color::Black), KINGSIDE_OPPONENT_PLANE),
        (castling_rights.has_queenside(Color::White), QUEENSIDE_OWN_PLANE),
        (castling_rights.has_queenside(Color::Black), QUEENSIDE_OPPONENT_PLANE),
    ];
    for (has_right, plane) in rights {
        if has_right {
            planes.fill_plane(plane);
        }
    }
}

/// Encodes a position into its 16 input planes.
/// The board is expected to be in canonical orientation already.
pub fn encode_position<B: Board>(board: &B) -> PositionPlanes {
    let mut planes = PositionPlanes::zeros();

    // Planes 0-11: pieces
    fill_pieces_for_color(&mut planes, board, Color::White);
    fill_pieces_for_color(&mut planes, board, Color::Black);

    // Planes 12-15: castling rights
    fill_castling_rights(&mut planes, board.castling_rights());

    planes
}

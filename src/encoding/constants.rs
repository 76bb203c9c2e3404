use crate::utils::Color;

// Constants for the input tensor
pub const NUM_PIECE_TYPE_BITS: usize = 6; // 6 piece types
pub const NUM_COLOR_BITS: usize = 2; // 2 colors
pub const NUM_BOARD_BITS: usize = NUM_PIECE_TYPE_BITS * NUM_COLOR_BITS; // 12 occupancy planes

pub const NUM_CASTLING_BITS: usize = 4; // 4 castling rights
pub const NUM_POSITION_BITS: usize = NUM_BOARD_BITS + NUM_CASTLING_BITS; // 16 8x8 planes in the input tensor

pub const KINGSIDE_OWN_PLANE: usize = NUM_BOARD_BITS;
pub const KINGSIDE_OPPONENT_PLANE: usize = NUM_BOARD_BITS + 1;
pub const QUEENSIDE_OWN_PLANE: usize = NUM_BOARD_BITS + 2;
pub const QUEENSIDE_OPPONENT_PLANE: usize = NUM_BOARD_BITS + 3;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

// Constants for the policy tensor
pub const NUM_RAY_DIRECTIONS: u8 = 8; // 8 directions for queen-like moves
pub const MAX_RAY_LENGTH: u8 = 7; // Maximum length of a queen-like move
pub const PLANES_PER_DIRECTION: u8 = MAX_RAY_LENGTH + 1; // distance 0 is never produced
pub const NUM_QUEEN_LIKE_PLANES: u8 = NUM_RAY_DIRECTIONS * PLANES_PER_DIRECTION; // 64
pub const NUM_KNIGHT_PLANES: u8 = 8; // one plane per knight jump
pub const NUM_MOVE_PLANES: usize = (NUM_QUEEN_LIKE_PLANES + NUM_KNIGHT_PLANES) as usize; // 72

pub const NUM_OUTPUT_POLICY_MOVES: usize = NUM_MOVE_PLANES * NUM_SQUARES; // 4608 entries in the policy head

/// Upper bound on the number of legal moves a decoded policy can hold.
pub const DECODE_BUFFER_CAPACITY: usize = 200;

/// The side to move every encoded sample is expressed from.
pub const CANONICAL_SIDE: Color = Color::White;

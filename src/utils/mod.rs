mod square;
mod color;
mod piece_type;
mod bitboard;
mod move_direction;

pub use square::*;
pub use color::*;
pub use piece_type::*;
pub use bitboard::*;
pub use move_direction::*;

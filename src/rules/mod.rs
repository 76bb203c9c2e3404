//! Rules engines that can feed the codec.

mod chess_position;

pub use chess_position::*;

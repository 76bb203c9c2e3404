pub mod utils;
pub mod r#move;
pub mod board;
pub mod error;
pub mod rules;
pub mod encoding;

pub use error::{CodecError, Result};

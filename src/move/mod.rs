//! This module contains the implementation of the `Move` struct and its associated functions.

mod r#move;

pub use r#move::*;

//! Conversion between chess positions and the fixed-shape tensors of a policy/value network.
//!
//! Inputs are 16 planes of 8x8, policies are 72 planes of 8x8 flattened to 4608 entries.
//! Every sample is expressed with white to move; black-to-move positions are mirrored.

pub mod constants;
mod outcome;
mod position;
mod policy_index;
mod move_mask;
mod perspective;
mod policy;
mod normalize;
mod samples;
pub mod batch;
#[cfg(feature = "torch")]
pub mod tensor;
#[cfg(test)]
mod test_boards;

pub use outcome::*;
pub use position::*;
pub use policy_index::*;
pub use move_mask::*;
pub use perspective::*;
pub use policy::*;
pub use normalize::*;
pub use samples::*;
pub use crate::error::{CodecError, Result};

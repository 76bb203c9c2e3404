use serde::{Deserialize, Serialize};
use crate::board::Board;
use crate::encoding::constants::{BOARD_SIZE, NUM_MOVE_PLANES, NUM_OUTPUT_POLICY_MOVES};
use crate::encoding::policy_index::{pack_index, PolicyIndex};
use crate::error::Result;

/// A `[72, 8, 8]` row-major mask with a 1 at the policy index of every legal move.
///
/// The flattened layout matches the policy vector, so `as_slice()[index.packed()]`
/// lines up with the raw network output for the same move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LegalMoveMask {
    data: Vec<u8>,
}

impl LegalMoveMask {
    pub const SHAPE: [usize; 3] = [NUM_MOVE_PLANES, BOARD_SIZE, BOARD_SIZE];

    pub fn zeros() -> Self {
        LegalMoveMask { data: vec![0; NUM_OUTPUT_POLICY_MOVES] }
    }

    pub fn set(&mut self, index: PolicyIndex) {
        self.data[index.packed()] = 1;
    }

    pub fn get(&self, plane: u8, rank: u8, file: u8) -> u8 {
        self.data[pack_index(plane, rank, file)]
    }

    /// Whether the flattened policy index is marked legal. Out-of-range indices are not.
    pub fn contains(&self, index: usize) -> bool {
        self.data.get(index).is_some_and(|&bit| bit == 1)
    }

    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&bit| bit == 1).count()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// Builds the legal move mask of a board from its legal move enumeration.
pub fn legal_move_mask<B: Board>(board: &B) -> Result<LegalMoveMask> {
    let mut mask = LegalMoveMask::zeros();
    for mv in board.legal_moves() {
        mask.set(PolicyIndex::calc(&mv)?);
    }
    Ok(mask)
}

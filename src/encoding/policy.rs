use crate::board::Board;
use crate::encoding::constants::{DECODE_BUFFER_CAPACITY, NUM_OUTPUT_POLICY_MOVES};
use crate::encoding::perspective::{mirror_move, needs_mirroring};
use crate::encoding::policy_index::PolicyIndex;
use crate::error::{CodecError, Result};

pub(crate) fn check_policy_length(raw_policy: &[f32]) -> Result<()> {
    if raw_policy.len() != NUM_OUTPUT_POLICY_MOVES {
        return Err(CodecError::ContractViolation(format!(
            "policy has {} entries, expected {}", raw_policy.len(), NUM_OUTPUT_POLICY_MOVES
        )));
    }
    Ok(())
}

/// Reads the raw policy entry of every legal move of `board`.
///
/// The result follows the board's own legal move order and is not normalized. Moves
/// are mirrored before lookup when the board is not in canonical orientation, matching
/// how the position was encoded.
pub fn decode_policy<B: Board>(board: &B, raw_policy: &[f32]) -> Result<Vec<f32>> {
    check_policy_length(raw_policy)?;

    let moves = board.legal_moves();
    if moves.len() > DECODE_BUFFER_CAPACITY {
        return Err(CodecError::BufferOverflow { num_moves: moves.len(), capacity: DECODE_BUFFER_CAPACITY });
    }

    let mirror = needs_mirroring(board);
    moves
        .into_iter()
        .map(|mv| {
            let mv = if mirror { mirror_move(mv) } else { mv };
            PolicyIndex::calc(&mv).map(|index| raw_policy[index.packed()])
        })
        .collect()
}

/// Like `decode_policy`, but zero-padded to the fixed decode buffer size.
pub fn decode_policy_padded<B: Board>(board: &B, raw_policy: &[f32]) -> Result<[f32; DECODE_BUFFER_CAPACITY]> {
    let probabilities = decode_policy(board, raw_policy)?;
    let mut row = [0.; DECODE_BUFFER_CAPACITY];
    row[..probabilities.len()].copy_from_slice(&probabilities);
    Ok(row)
}

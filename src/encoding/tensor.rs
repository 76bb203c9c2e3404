use lazy_static::lazy_static;
use tch::{Device, Kind, Tensor};
use crate::board::Board;
use crate::encoding::constants::{DECODE_BUFFER_CAPACITY, NUM_OUTPUT_POLICY_MOVES};
use crate::encoding::move_mask::LegalMoveMask;
use crate::encoding::policy::decode_policy;
use crate::encoding::position::PositionPlanes;
use crate::error::{CodecError, Result};

lazy_static! {
    pub static ref DEVICE: Device = Device::cuda_if_available();
}

const fn shape_i64<const N: usize>(shape: [usize; N]) -> [i64; N] {
    let mut out = [0i64; N];
    let mut i = 0;
    while i < N {
        out[i] = shape[i] as i64;
        i += 1;
    }
    out
}

impl PositionPlanes {
    /// A `[16, 8, 8]` float tensor on `DEVICE`.
    pub fn to_tensor(&self) -> Tensor {
        Tensor::from_slice(self.as_slice())
            .view(shape_i64(PositionPlanes::SHAPE))
            .to_device(*DEVICE)
    }
}

impl LegalMoveMask {
    /// A `[72, 8, 8]` float tensor on `DEVICE`, 1 where a move is legal.
    pub fn to_tensor(&self) -> Tensor {
        Tensor::from_slice(self.as_slice())
            .to_kind(Kind::Float)
            .view(shape_i64(LegalMoveMask::SHAPE))
            .to_device(*DEVICE)
    }
}

/// Stacks a batch of position planes into a `[batch, 16, 8, 8]` tensor.
pub fn stack_positions(positions: &[PositionPlanes]) -> Tensor {
    let tensors: Vec<Tensor> = positions.iter().map(PositionPlanes::to_tensor).collect();
    Tensor::stack(&tensors, 0)
}

/// Copies a policy tensor of any shape with 4608 elements back to the host.
pub fn policy_from_tensor(policy: &Tensor) -> Result<Vec<f32>> {
    let flat = policy
        .to_kind(Kind::Float)
        .to_device(Device::Cpu)
        .flatten(0, -1);
    let values = Vec::<f32>::try_from(&flat)
        .map_err(|err| CodecError::ContractViolation(format!("unreadable policy tensor: {}", err)))?;
    if values.len() != NUM_OUTPUT_POLICY_MOVES {
        return Err(CodecError::ContractViolation(format!(
            "policy tensor has {} elements, expected {}", values.len(), NUM_OUTPUT_POLICY_MOVES
        )));
    }
    Ok(values)
}

/// Decodes a network policy tensor for `board`, zero-padded to the decode buffer size.
pub fn decode_policy_tensor<B: Board>(board: &B, policy: &Tensor) -> Result<[f32; DECODE_BUFFER_CAPACITY]> {
    let raw_policy = policy_from_tensor(policy)?;
    let probabilities = decode_policy(board, &raw_policy)?;
    let mut row = [0.; DECODE_BUFFER_CAPACITY];
    row[..probabilities.len()].copy_from_slice(&probabilities);
    Ok(row)
}

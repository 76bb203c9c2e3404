use thiserror::Error;

/// Errors produced while encoding positions and moves or decoding network output.
///
/// Every variant is a deterministic failure: retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The move is neither straight, diagonal, nor one of the eight knight jumps.
    #[error("unknown move shape: file delta {file_diff}, rank delta {rank_diff}")]
    UnknownMoveShape { file_diff: i8, rank_diff: i8 },

    #[error("unknown outcome '{0}', expected '1-0', '0-1' or '1/2-1/2'")]
    UnknownOutcome(String),

    /// More legal moves than the fixed decode buffer can hold.
    #[error("{num_moves} legal moves exceed the decode buffer capacity of {capacity}")]
    BufferOverflow { num_moves: usize, capacity: usize },

    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("invalid FEN '{0}'")]
    InvalidFen(String),

    #[error("invalid move '{0}'")]
    InvalidMove(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

use thiserror::Error;

use crate::hash::HashError;

/// Errors produced while building a Merkle root.
#[derive(Debug, Error)]
pub enum MerkleError {
    /// Block size and file size do not describe at least one block.
    #[error("invalid block layout: block size {block_size}, file size {file_size}")]
    InvalidLayout { file_size: u64, block_size: u64 },

    /// The source ended before a block could be filled.
    #[error("short read on block {block}: expected {expected} bytes, got {actual}")]
    ShortRead {
        block: u64,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("hash error: {0}")]
    Hash(#[from] HashError),

    /// No leaves reached the reducer.
    #[error("no leaves to reduce")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, MerkleError>;

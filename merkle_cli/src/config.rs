//! Command-line configuration and the checks made before hashing starts.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("File {0} does not exist!")]
    FileNotFound(PathBuf),

    #[error("File {0} is empty!")]
    EmptyFile(PathBuf),

    #[error("Block size must be greater than zero!")]
    ZeroBlockSize,

    #[error("Block size {block_size} is greater than the size of the file ({file_size} bytes)!")]
    BlockSizeTooLarge { block_size: u64, file_size: u64 },

    #[error("Could not read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Validated inputs for one root computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub file_path: PathBuf,
    pub block_size: u64,
    pub file_size: u64,
}

/// Check that `path` names a non-empty file and `0 < block_size <= file_size`.
pub fn validate(path: &Path, block_size: u64) -> Result<CliConfig, ValidationError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        Ok(_) => return Err(ValidationError::FileNotFound(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ValidationError::FileNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ValidationError::Metadata {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let file_size = metadata.len();
    if file_size == 0 {
        return Err(ValidationError::EmptyFile(path.to_path_buf()));
    }
    if block_size == 0 {
        return Err(ValidationError::ZeroBlockSize);
    }
    if block_size > file_size {
        return Err(ValidationError::BlockSizeTooLarge {
            block_size,
            file_size,
        });
    }

    Ok(CliConfig {
        file_path: path.to_path_buf(),
        block_size,
        file_size,
    })
}

//! Hash primitive adapter.
//!
//! The tree only needs `hash(bytes) -> digest` with a fixed output width.

use sha2::{Digest as _, Sha256};
use thiserror::Error;

use crate::digest::Digest;

/// Failure reported by a hash primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct HashError {
    pub reason: String,
}

impl HashError {
    pub fn new(reason: impl Into<String>) -> Self {
        HashError {
            reason: reason.into(),
        }
    }
}

/// A fixed-width hash function.
pub trait HashFunction {
    /// Width in bytes of every digest this function returns.
    fn output_len(&self) -> usize;

    fn hash(&self, bytes: &[u8]) -> Result<Digest, HashError>;
}

/// SHA-256, 32-byte digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    #[inline]
    fn output_len(&self) -> usize {
        32
    }

    #[inline]
    fn hash(&self, bytes: &[u8]) -> Result<Digest, HashError> {
        let out: [u8; 32] = Sha256::digest(bytes).into();
        Ok(Digest::from(out))
    }
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn output_len(&self) -> usize {
        (**self).output_len()
    }

    fn hash(&self, bytes: &[u8]) -> Result<Digest, HashError> {
        (**self).hash(bytes)
    }
}

/// Hash `bytes` and check the result has the width `hasher` promises.
pub(crate) fn hash_checked<H: HashFunction + ?Sized>(
    hasher: &H,
    bytes: &[u8],
) -> Result<Digest, HashError> {
    let digest = hasher.hash(bytes)?;
    if digest.len() != hasher.output_len() {
        return Err(HashError::new(format!(
            "digest width {} does not match expected {}",
            digest.len(),
            hasher.output_len()
        )));
    }
    Ok(digest)
}

//! Leaf extraction: one digest per fixed-size block, in file order.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hash::{HashFunction, hash_checked};

/// How a source of `file_size` bytes splits into `block_size` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    file_size: u64,
    block_size: u64,
}

impl BlockLayout {
    /// Requires `0 < block_size <= file_size`.
    pub fn new(file_size: u64, block_size: u64) -> Result<Self> {
        if block_size == 0 || file_size == 0 || block_size > file_size {
            return Err(MerkleError::InvalidLayout {
                file_size,
                block_size,
            });
        }
        Ok(BlockLayout {
            file_size,
            block_size,
        })
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// `ceil(file_size / block_size)`
    pub fn total_blocks(&self) -> u64 {
        self.file_size / self.block_size + u64::from(self.file_size % self.block_size != 0)
    }

    /// Byte length of block `index`; only the last block may be shorter.
    pub fn block_len(&self, index: u64) -> u64 {
        let tail = self.file_size % self.block_size;
        if index + 1 == self.total_blocks() && tail != 0 {
            tail
        } else {
            self.block_size
        }
    }
}

/// Read as many bytes as fit in `buf`, stopping early only at end of stream.
fn fill(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Hash every block of `reader` described by `layout`.
///
/// Reads are sequential and non-overlapping. If the source ends before a
/// block is complete, the whole extraction fails with
/// [`MerkleError::ShortRead`] and no leaves are returned.
pub fn extract_leaves<R, H>(mut reader: R, layout: BlockLayout, hasher: &H) -> Result<Vec<Digest>>
where
    R: Read,
    H: HashFunction + ?Sized,
{
    let total = layout.total_blocks();
    let block_size = usize::try_from(layout.block_size()).map_err(|_| {
        MerkleError::InvalidLayout {
            file_size: layout.file_size(),
            block_size: layout.block_size(),
        }
    })?;
    debug!(
        file_size = layout.file_size(),
        block_size,
        total_blocks = total,
        "extracting leaves"
    );

    let mut buffer = vec![0u8; block_size];
    // grows as blocks arrive; `total` is only what the caller claims
    let mut leaves = Vec::new();

    for block in 0..total {
        // block_len never exceeds block_size, which fits in usize
        let expected = layout.block_len(block) as usize;
        let actual = fill(&mut reader, &mut buffer[..expected])?;
        if actual != expected {
            warn!(block, expected, actual, "source ended before block was complete");
            return Err(MerkleError::ShortRead {
                block,
                expected,
                actual,
            });
        }

        let leaf = hash_checked(hasher, &buffer[..expected])?;
        trace!(block, leaf = %leaf, "leaf");
        leaves.push(leaf);
    }

    Ok(leaves)
}

/// Open `path` and hash its blocks. The file size comes from its metadata.
pub fn extract_file_leaves<P, H>(path: P, block_size: u64, hasher: &H) -> Result<Vec<Digest>>
where
    P: AsRef<Path>,
    H: HashFunction + ?Sized,
{
    let file = File::open(path.as_ref())?;
    let file_size = file.metadata()?.len();
    let layout = BlockLayout::new(file_size, block_size)?;
    extract_leaves(file, layout, hasher)
}

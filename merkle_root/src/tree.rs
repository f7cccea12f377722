//! File-level entry point: extract leaves, then reduce them.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::digest::Digest;
use crate::error::Result;
use crate::hash::{HashFunction, Sha256Hash};
use crate::leaves::{BlockLayout, extract_file_leaves, extract_leaves};
use crate::reduce::reduce;

/// Computes and holds the root of one file's Merkle tree.
///
/// Every `make*` call starts from fresh state; a failed call leaves no root.
#[derive(Debug, Default)]
pub struct MerkleTree<H = Sha256Hash> {
    hasher: H,
    root: Option<Digest>,
}

impl MerkleTree<Sha256Hash> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HashFunction> MerkleTree<H> {
    pub fn with_hasher(hasher: H) -> Self {
        MerkleTree { hasher, root: None }
    }

    /// Build the tree over the file at `path`.
    pub fn make<P: AsRef<Path>>(&mut self, path: P, block_size: u64) -> Result<()> {
        self.root = None;
        let path = path.as_ref();
        debug!(path = %path.display(), block_size, "building merkle tree");
        let leaves = extract_file_leaves(path, block_size, &self.hasher)?;
        self.finish(leaves)
    }

    /// Build the tree over `file_size` bytes read from `reader`.
    pub fn make_from_reader<R: Read>(
        &mut self,
        reader: R,
        file_size: u64,
        block_size: u64,
    ) -> Result<()> {
        self.root = None;
        let layout = BlockLayout::new(file_size, block_size)?;
        let leaves = extract_leaves(reader, layout, &self.hasher)?;
        self.finish(leaves)
    }

    fn finish(&mut self, leaves: Vec<Digest>) -> Result<()> {
        let leaf_count = leaves.len();
        let root = reduce(leaves, &self.hasher)?;
        info!(leaf_count, root = %root, "merkle root computed");
        self.root = Some(root);
        Ok(())
    }

    /// Root of the last successful build, if any.
    pub fn root_hash(&self) -> Option<&Digest> {
        self.root.as_ref()
    }
}

/// Merkle root of the file at `path` using SHA-256.
pub fn merkle_root_of_file<P: AsRef<Path>>(path: P, block_size: u64) -> Result<Digest> {
    let leaves = extract_file_leaves(path, block_size, &Sha256Hash)?;
    reduce(leaves, &Sha256Hash)
}

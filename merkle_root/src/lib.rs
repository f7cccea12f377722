//! Binary Merkle tree root over the fixed-size blocks of a file.
//!
//! The file is split into `block_size` chunks (the last one may be shorter),
//! each chunk is hashed into a leaf, and the leaves are paired front-to-back
//! until a single root digest remains.
//!
//! ```rust
//! use merkle_root::MerkleTree;
//!
//! let mut tree = MerkleTree::new();
//! tree.make_from_reader(&b"abcd"[..], 4, 2).unwrap();
//! assert_eq!(tree.root_hash().unwrap().len(), 32);
//! ```

pub mod digest;
pub mod error;
pub mod hash;
pub mod leaves;
pub mod reduce;
pub mod tree;

pub use digest::{Digest, Node};
pub use error::MerkleError;
pub use hash::{HashError, HashFunction, Sha256Hash};
pub use leaves::{BlockLayout, extract_file_leaves, extract_leaves};
pub use reduce::{reduce, round_count};
pub use tree::{MerkleTree, merkle_root_of_file};

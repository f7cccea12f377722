//! Pairwise reduction of leaf digests into a single root.
//!
//! The reducer knows nothing about files or blocks; it takes an ordered
//! sequence of equal-width digests. Pairing is strict FIFO: the two front
//! nodes are removed, hashed as `left || right`, and the parent goes to the
//! back of the queue.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::digest::{Digest, Node};
use crate::error::{MerkleError, Result};
use crate::hash::{HashFunction, hash_checked};

/// Hash two sibling nodes into their parent.
#[inline]
fn hash_parent<H: HashFunction + ?Sized>(hasher: &H, left: &Node, right: &Node) -> Result<Digest> {
    let mut input = left.canonical_bytes();
    input.extend_from_slice(&right.canonical_bytes());
    Ok(hash_checked(hasher, &input)?)
}

/// Number of pairing steps `reduce` performs for `leaf_count` leaves.
pub fn round_count(leaf_count: usize) -> usize {
    match leaf_count {
        0 | 1 => 0,
        n => n + n % 2 - 1,
    }
}

/// Reduce `leaves` to the Merkle root.
///
/// An odd leaf count gets one [`Node::Padding`] appended before pairing; a
/// single leaf is returned unchanged.
pub fn reduce<H: HashFunction + ?Sized>(leaves: Vec<Digest>, hasher: &H) -> Result<Digest> {
    let leaf_count = leaves.len();
    if leaf_count == 0 {
        return Err(MerkleError::EmptyInput);
    }
    if leaf_count == 1 {
        debug!("single leaf, root is the leaf itself");
        return leaves.into_iter().next().ok_or(MerkleError::EmptyInput);
    }

    let mut queue: VecDeque<Node> = VecDeque::with_capacity(leaf_count + 1);
    queue.extend(leaves.into_iter().map(Node::Digest));
    if queue.len() % 2 == 1 {
        queue.push_back(Node::Padding);
    }
    debug!(leaf_count, steps = round_count(leaf_count), "reducing leaves");

    while queue.len() > 1 {
        let (Some(left), Some(right)) = (queue.pop_front(), queue.pop_front()) else {
            break;
        };
        let parent = hash_parent(hasher, &left, &right)?;
        trace!(parent = %parent, remaining = queue.len(), "paired");
        queue.push_back(Node::Digest(parent));
    }

    // Padding always has a partner, so the survivor is a real digest.
    queue
        .pop_front()
        .and_then(Node::into_digest)
        .ok_or(MerkleError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256Hash;

    fn leaf(data: &[u8]) -> Digest {
        Sha256Hash.hash(data).unwrap()
    }

    fn combine(left: &str, right: &str) -> Digest {
        Sha256Hash.hash(format!("{left}{right}").as_bytes()).unwrap()
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            reduce(Vec::new(), &Sha256Hash),
            Err(MerkleError::EmptyInput)
        ));
    }

    #[test]
    fn single_leaf_is_root() -> Result<()> {
        let l = leaf(b"only");
        assert_eq!(reduce(vec![l.clone()], &Sha256Hash)?, l);
        Ok(())
    }

    #[test]
    fn two_leaves() -> Result<()> {
        let (a, b) = (leaf(b"ab"), leaf(b"cd"));
        let expected = combine(&a.to_hex(), &b.to_hex());
        assert_eq!(reduce(vec![a, b], &Sha256Hash)?, expected);
        Ok(())
    }

    #[test]
    fn three_leaves_pad_with_empty_string() -> Result<()> {
        let (a, b, c) = (leaf(b"1"), leaf(b"2"), leaf(b"3"));
        let left = combine(&a.to_hex(), &b.to_hex());
        let right = combine(&c.to_hex(), "");
        let expected = combine(&left.to_hex(), &right.to_hex());
        assert_eq!(reduce(vec![a, b, c], &Sha256Hash)?, expected);
        Ok(())
    }

    #[test]
    fn padding_is_not_a_duplicate_of_the_last_leaf() -> Result<()> {
        let (a, b, c) = (leaf(b"1"), leaf(b"2"), leaf(b"3"));
        let duplicated = combine(
            &combine(&a.to_hex(), &b.to_hex()).to_hex(),
            &combine(&c.to_hex(), &c.to_hex()).to_hex(),
        );
        assert_ne!(reduce(vec![a, b, c], &Sha256Hash)?, duplicated);
        Ok(())
    }

    #[test]
    fn five_leaves_carry_padding_pair_to_last_step() -> Result<()> {
        // [l0..l4, pad] -> p01 p23 p4_ -> p0123, then (p4_ p0123)
        let l: Vec<Digest> = (0u8..5).map(|i| leaf(&[i])).collect();
        let p01 = combine(&l[0].to_hex(), &l[1].to_hex());
        let p23 = combine(&l[2].to_hex(), &l[3].to_hex());
        let p4_ = combine(&l[4].to_hex(), "");
        let p0123 = combine(&p01.to_hex(), &p23.to_hex());
        let expected = combine(&p4_.to_hex(), &p0123.to_hex());
        assert_eq!(reduce(l, &Sha256Hash)?, expected);
        Ok(())
    }

    #[test]
    fn six_leaves_pair_fifo_across_rounds() -> Result<()> {
        // queue: [l0..l5] -> p01 p23 p45 -> (p01 p23) then (p45 p0123)
        let l: Vec<Digest> = (0u8..6).map(|i| leaf(&[i])).collect();
        let p01 = combine(&l[0].to_hex(), &l[1].to_hex());
        let p23 = combine(&l[2].to_hex(), &l[3].to_hex());
        let p45 = combine(&l[4].to_hex(), &l[5].to_hex());
        let p0123 = combine(&p01.to_hex(), &p23.to_hex());
        let expected = combine(&p45.to_hex(), &p0123.to_hex());
        assert_eq!(reduce(l, &Sha256Hash)?, expected);
        Ok(())
    }

    #[test]
    fn steps_per_leaf_count() {
        assert_eq!(round_count(0), 0);
        assert_eq!(round_count(1), 0);
        assert_eq!(round_count(2), 1);
        assert_eq!(round_count(3), 3);
        assert_eq!(round_count(4), 3);
        assert_eq!(round_count(5), 5);
    }
}

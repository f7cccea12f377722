//! Digest values and pairing-queue nodes.

use std::fmt;

/// Fixed-width hash output. Immutable once produced.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Box<[u8]>);

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(s).map(Digest::from)
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Digest(bytes.into_boxed_slice())
    }
}

impl<const N: usize> From<[u8; N]> for Digest {
    fn from(bytes: [u8; N]) -> Self {
        Digest(Box::new(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Element of the pairing queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Digest(Digest),
    /// Synthetic leaf appended once when the leaf count is odd.
    Padding,
}

impl Node {
    /// Bytes this node contributes to its parent's hash input: the hex text
    /// of the digest, or nothing for padding.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        match self {
            Node::Digest(d) => d.to_hex().into_bytes(),
            Node::Padding => Vec::new(),
        }
    }

    pub fn into_digest(self) -> Option<Digest> {
        match self {
            Node::Digest(d) => Some(d),
            Node::Padding => None,
        }
    }
}

impl From<Digest> for Node {
    fn from(d: Digest) -> Self {
        Node::Digest(d)
    }
}

//! # Namehash
//!
//! Pure derivation of naming-system lookup keys.
//!
//! Implements the ENS namehash (EIP-137) restricted to the shapes a claim can
//! take: `name.eth` and `subdomain.name.eth`.
//!
//! ```text
//! node(root)         = 0x00..00
//! node(label.parent) = keccak256(node(parent) ++ keccak256(label))
//! ```
//!
//! - NO I/O operations
//! - NO failure modes; any label, including the empty string, hashes

use super::entities::NameRecord;
use super::value_objects::{Node, TLD_LABEL};
use sha3::{Digest, Keccak256};

/// Keccak-256 of raw bytes.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Hash of a single label, over its UTF-8 bytes.
#[must_use]
pub fn labelhash(label: &str) -> [u8; 32] {
    keccak256(label.as_bytes())
}

/// Extends `parent` by one label.
#[must_use]
pub fn child_node(parent: &Node, label: &str) -> Node {
    let mut hasher = Keccak256::new();
    hasher.update(parent.as_bytes());
    hasher.update(labelhash(label));
    Node(hasher.finalize().into())
}

/// Node of the top-level domain.
#[must_use]
pub fn tld_node() -> Node {
    child_node(&Node::ROOT, TLD_LABEL)
}

/// Lookup key for a (name, subdomain) pair.
///
/// The subdomain level is only added when `subdomain` is non-empty, so
/// `namehash("alice", "")` is the node of `alice.eth`.
#[must_use]
pub fn namehash(name: &str, subdomain: &str) -> Node {
    let node = child_node(&tld_node(), name);
    if subdomain.is_empty() {
        node
    } else {
        child_node(&node, subdomain)
    }
}

/// Lookup key for a stored claim.
#[must_use]
pub fn namehash_record(record: &NameRecord) -> Node {
    namehash(&record.name, &record.subdomain)
}

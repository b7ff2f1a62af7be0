//! # Domain Value Objects
//!
//! Immutable value types for Project Handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute key of the reverse text record that must point back at the
/// claiming project.
pub const TEXT_KEY: &str = "juicebox_project_id";

/// Permission index a delegate needs to set another owner's project handle.
pub const SET_HANDLE_PERMISSION: PermissionIndex = 19;

/// Top-level label every claimed name lives under.
pub const TLD_LABEL: &str = "eth";

/// Index into a 256-entry permission set.
pub type PermissionIndex = u8;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte account address (project owners, delegates, callers).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// PROJECT ID
// =============================================================================

/// Numeric project identifier issued by the project registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl ProjectId {
    /// Wraps a raw project number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw project number.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// =============================================================================
// NODE (32 bytes)
// =============================================================================

/// A 32-byte naming-system node, the lookup key derived by `namehash`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Node(pub [u8; 32]);

impl Node {
    /// The root node.
    pub const ROOT: Self = Self([0u8; 32]);

    /// Creates a node from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parses a `0x`-prefixed (or bare) 64 character hex string.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).ok()?;
        let array: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(array))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Node {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let addr = Address::new([0xAB; 20]);
        assert_eq!(addr.to_string(), format!("0x{}", "ab".repeat(20)));
        assert!(!addr.is_zero());
        assert!(Address::ZERO.is_zero());
    }

    #[test]
    fn test_project_id_display() {
        assert_eq!(ProjectId::new(1234).to_string(), "1234");
        assert_eq!(ProjectId::from(5).get(), 5);
    }

    #[test]
    fn test_node_hex_roundtrip() {
        let node = Node::new([0x11; 32]);
        assert_eq!(Node::from_hex(&node.to_string()), Some(node));
    }

    #[test]
    fn test_node_from_hex_rejects_wrong_length() {
        assert_eq!(Node::from_hex("0x1234"), None);
        assert_eq!(Node::from_hex("zz"), None);
    }
}

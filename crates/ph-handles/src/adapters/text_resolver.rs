//! Text Resolver Adapter
//!
//! Implements `TextResolver` port with an in-memory record table.
//!
//! In production the records live in the naming system and are controlled by
//! whoever owns the name; this adapter stands in for that resolver.

use crate::domain::{namehash, HandleError, Node};
use crate::ports::outbound::TextResolver;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// In-memory text resolver.
pub struct InMemoryTextResolver {
    /// (node, key) -> value.
    records: RwLock<HashMap<(Node, String), String>>,
    /// Simulates an unreachable resolver.
    unavailable: AtomicBool,
}

impl InMemoryTextResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Set the text record `key` of `node`.
    pub fn set_text(&self, node: Node, key: &str, value: impl Into<String>) {
        let value = value.into();
        debug!(%node, key, value = %value, "Text record set");
        self.records.write().insert((node, key.to_string()), value);
    }

    /// Set the text record `key` of `subdomain.name.eth` (or `name.eth`).
    pub fn set_text_for_name(
        &self,
        name: &str,
        subdomain: &str,
        key: &str,
        value: impl Into<String>,
    ) {
        self.set_text(namehash(name, subdomain), key, value);
    }

    /// Remove the text record `key` of `node`.
    pub fn clear_text(&self, node: &Node, key: &str) {
        self.records.write().remove(&(*node, key.to_string()));
    }

    /// Make every lookup fail until re-enabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }
}

impl Default for InMemoryTextResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TextResolver for InMemoryTextResolver {
    fn text_record(&self, node: &Node, key: &str) -> Result<String, HandleError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(HandleError::ResolverError("resolver unavailable".to_string()));
        }
        Ok(self
            .records
            .read()
            .get(&(*node, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TEXT_KEY;

    #[test]
    fn test_unset_record_is_empty() {
        let resolver = InMemoryTextResolver::new();
        assert_eq!(resolver.text_record(&Node::ROOT, TEXT_KEY).unwrap(), "");
    }

    #[test]
    fn test_set_and_read() {
        let resolver = InMemoryTextResolver::new();
        resolver.set_text_for_name("alice", "", TEXT_KEY, "1");
        let node = namehash("alice", "");
        assert_eq!(resolver.text_record(&node, TEXT_KEY).unwrap(), "1");
        assert_eq!(resolver.text_record(&node, "url").unwrap(), "");
    }

    #[test]
    fn test_clear_text() {
        let resolver = InMemoryTextResolver::new();
        let node = namehash("alice", "proj");
        resolver.set_text(node, TEXT_KEY, "1");
        resolver.clear_text(&node, TEXT_KEY);
        assert_eq!(resolver.text_record(&node, TEXT_KEY).unwrap(), "");
    }

    #[test]
    fn test_unavailable_resolver_fails() {
        let resolver = InMemoryTextResolver::new();
        resolver.set_unavailable(true);
        assert!(matches!(
            resolver.text_record(&Node::ROOT, TEXT_KEY),
            Err(HandleError::ResolverError(_))
        ));
    }
}

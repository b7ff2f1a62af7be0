//! # Domain Entities
//!
//! The claimed name record stored per project.

use super::value_objects::TLD_LABEL;
use serde::{Deserialize, Serialize};

/// A project's claimed (unverified) name.
///
/// `name` is the second-level label (`alice` in `alice.eth`), `subdomain` an
/// optional third-level label (`proj` in `proj.alice.eth`). An empty `name`
/// means the project has no claim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Second-level label.
    pub name: String,
    /// Third-level label, empty when the claim is a bare name.
    pub subdomain: String,
}

impl NameRecord {
    /// Claim on a bare name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdomain: String::new(),
        }
    }

    /// Claim on a subdomain of a name.
    pub fn with_subdomain(name: impl Into<String>, subdomain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdomain: subdomain.into(),
        }
    }

    /// True when no name is claimed.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.name.is_empty()
    }

    /// True when the claim carries a subdomain label.
    #[must_use]
    pub fn has_subdomain(&self) -> bool {
        !self.subdomain.is_empty()
    }

    /// Handle as shown to users: `subdomain.name`, or `name` alone.
    ///
    /// Never produces a leading separator for subdomain-less claims.
    #[must_use]
    pub fn display(&self) -> String {
        if self.has_subdomain() {
            format!("{}.{}", self.subdomain, self.name)
        } else {
            self.name.clone()
        }
    }

    /// Fully qualified name including the top-level label.
    #[must_use]
    pub fn ens_name(&self) -> String {
        format!("{}.{}", self.display(), TLD_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let record = NameRecord::default();
        assert!(record.is_unset());
        assert_eq!(record.display(), "");
    }

    #[test]
    fn test_display_bare_name() {
        let record = NameRecord::new("alice");
        assert_eq!(record.display(), "alice");
        assert_eq!(record.ens_name(), "alice.eth");
    }

    #[test]
    fn test_display_with_subdomain() {
        let record = NameRecord::with_subdomain("alice", "proj");
        assert_eq!(record.display(), "proj.alice");
        assert_eq!(record.ens_name(), "proj.alice.eth");
    }

    #[test]
    fn test_empty_subdomain_has_no_leading_separator() {
        let record = NameRecord::with_subdomain("alice", "");
        assert_eq!(record.display(), "alice");
    }

    #[test]
    fn test_subdomain_without_name_is_unset() {
        let record = NameRecord::with_subdomain("", "proj");
        assert!(record.is_unset());
        assert_eq!(record.display(), "proj.");
    }
}

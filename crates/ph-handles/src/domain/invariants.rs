//! # Domain Invariants
//!
//! Business rules for Project Handles.

use super::value_objects::{Address, ProjectId};
use primitive_types::U256;

/// Parses a reverse text record as a base-10 unsigned integer.
///
/// Returns `None` for empty text, any non-digit character (signs and
/// whitespace included) and values wider than 256 bits.
#[must_use]
pub fn parse_reverse_pointer(text: &str) -> Option<U256> {
    if text.is_empty() {
        return None;
    }
    U256::from_dec_str(text).ok()
}

/// Invariant: reverse record points back at the claiming project.
///
/// A name is a handle for project P only if the naming system's text record
/// for that name parses to exactly P. Unparseable and absent values never
/// match.
#[must_use]
pub fn invariant_reverse_pointer_matches(text: &str, project_id: ProjectId) -> bool {
    parse_reverse_pointer(text).is_some_and(|pointer| pointer == U256::from(project_id.get()))
}

/// Invariant: only the owner or a permitted delegate may write.
#[must_use]
pub fn invariant_authorized_writer(caller: &Address, owner: &Address, delegated: bool) -> bool {
    caller == owner || delegated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_reverse_pointer("42"), Some(U256::from(42u64)));
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_reverse_pointer("007"), Some(U256::from(7u64)));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_reverse_pointer(""), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_reverse_pointer("abc"), None);
        assert_eq!(parse_reverse_pointer("12a"), None);
        assert_eq!(parse_reverse_pointer(" 12"), None);
        assert_eq!(parse_reverse_pointer("-1"), None);
        assert_eq!(parse_reverse_pointer("+1"), None);
        assert_eq!(parse_reverse_pointer("0x10"), None);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let too_wide = format!("{}0", U256::MAX);
        assert_eq!(parse_reverse_pointer(&too_wide), None);
    }

    #[test]
    fn test_pointer_matches_exact_project() {
        assert!(invariant_reverse_pointer_matches("12", ProjectId::new(12)));
        assert!(!invariant_reverse_pointer_matches("13", ProjectId::new(12)));
        assert!(!invariant_reverse_pointer_matches("", ProjectId::new(0)));
    }

    #[test]
    fn test_pointer_wider_than_project_id_never_matches() {
        let wide = (U256::from(u64::MAX) + U256::one()).to_string();
        assert!(!invariant_reverse_pointer_matches(&wide, ProjectId::new(0)));
    }

    #[test]
    fn test_authorized_writer() {
        let owner = Address::new([1; 20]);
        let other = Address::new([2; 20]);
        assert!(invariant_authorized_writer(&owner, &owner, false));
        assert!(invariant_authorized_writer(&other, &owner, true));
        assert!(!invariant_authorized_writer(&other, &owner, false));
    }
}

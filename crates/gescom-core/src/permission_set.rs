//! The per-user permission set and its string encoding.
//!
//! A user's grants are persisted as a single text column: slugs joined by
//! `;`. Stored strings may carry empty tokens (trailing delimiters,
//! accidental `;;`), so decoding drops them. Internally the set is a real
//! set of strings; the delimited form exists only at the persistence
//! boundary.

use std::collections::BTreeSet;

/// Separator between slugs in the persisted form.
pub const DELIMITER: &str = ";";

/// The set of permission slugs granted to one user.
///
/// Backed by a `BTreeSet` so encoding is deterministic, though the encoded
/// order is not part of any contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    slugs: BTreeSet<String>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the persisted delimited string into a set.
    ///
    /// Empty tokens are semantically absent and are dropped; a malformed or
    /// empty string simply decodes to the empty set. Never errors.
    pub fn decode(raw: &str) -> Self {
        Self {
            slugs: raw
                .split(DELIMITER)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Serializes the set back to its persisted form.
    ///
    /// Never emits empty tokens or duplicates.
    pub fn encode(&self) -> String {
        self.slugs
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Adds a slug. Granting an already-present slug is a no-op.
    ///
    /// Returns whether the set changed.
    pub fn grant(&mut self, slug: &str) -> bool {
        if slug.is_empty() {
            return false;
        }
        self.slugs.insert(slug.to_string())
    }

    /// Removes a slug. Returns whether the set changed.
    pub fn revoke(&mut self, slug: &str) -> bool {
        self.slugs.remove(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            slugs: iter.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_drops_empty_tokens() {
        assert!(PermissionSet::decode("").is_empty());
        assert!(PermissionSet::decode(";").is_empty());
        assert!(PermissionSet::decode(";;").is_empty());

        let set = PermissionSet::decode("USER_CONSULT;;SERVICE_DELETE;");
        assert_eq!(set.len(), 2);
        assert!(set.contains("USER_CONSULT"));
        assert!(set.contains("SERVICE_DELETE"));
    }

    #[test]
    fn decode_collapses_duplicates() {
        let set = PermissionSet::decode("USER_CONSULT;USER_CONSULT;USER_CONSULT");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn encode_never_reintroduces_empties() {
        let set = PermissionSet::decode("USER_CONSULT;SERVICE_DELETE;");
        let raw = set.encode();
        assert!(!raw.starts_with(';'));
        assert!(!raw.ends_with(';'));
        assert!(!raw.contains(";;"));
    }

    #[test]
    fn decode_is_idempotent_through_encode() {
        for raw in ["", ";", "A;B;C", "B;;A;A;", ";USER_CONSULT"] {
            let once = PermissionSet::decode(raw);
            let twice = PermissionSet::decode(&once.encode());
            assert_eq!(once, twice, "round trip changed the set for {raw:?}");
        }
    }

    #[test]
    fn grant_is_idempotent() {
        let mut set = PermissionSet::decode("USER_CONSULT");
        assert!(set.grant("USER_DELETE"));
        assert!(!set.grant("USER_DELETE"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn grant_ignores_empty_slug() {
        let mut set = PermissionSet::new();
        assert!(!set.grant(""));
        assert!(set.is_empty());
    }

    #[test]
    fn revoke_removes_membership() {
        let mut set = PermissionSet::decode("USER_CONSULT;SERVICE_DELETE");
        assert!(set.revoke("SERVICE_DELETE"));
        assert!(!set.revoke("SERVICE_DELETE"));
        assert!(!set.contains("SERVICE_DELETE"));
        assert!(set.contains("USER_CONSULT"));
    }
}

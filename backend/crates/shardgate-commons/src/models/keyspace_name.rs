//! Type-safe wrapper for keyspace names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe wrapper for keyspace names.
///
/// Ensures keyspace names cannot be accidentally used where table names are
/// expected. Names are kept verbatim: keyspace lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyspaceName(String);

impl KeyspaceName {
    /// Creates a new KeyspaceName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the keyspace name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner String.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for KeyspaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for KeyspaceName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for KeyspaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for KeyspaceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_keyspace_name_is_case_sensitive() {
        assert_ne!(KeyspaceName::new("Commerce"), KeyspaceName::new("commerce"));
        assert_eq!(KeyspaceName::from("commerce").as_str(), "commerce");
    }

    #[test]
    fn test_keyspace_name_borrows_as_str() {
        let mut map = HashMap::new();
        map.insert(KeyspaceName::new("ks"), 1);
        assert_eq!(map.get("ks"), Some(&1));
    }
}

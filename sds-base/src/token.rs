//! Interned name tokens. A `Token` is the key type for every named lookup in
//! the data model: container children, schema fields, and locator path
//! elements are all addressed by `Token`.
//!
//! Interning is process-wide and initialized on first use. There is no
//! teardown; interned strings live for the remainder of the process, which
//! lets `Token` be a `Copy` wrapper around a `&'static str` with pointer
//! equality.

use fnv::FnvHashSet;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

lazy_static::lazy_static! {
    static ref TOKEN_REGISTRY: RwLock<FnvHashSet<&'static str>> = {
        let mut registry = FnvHashSet::default();
        // The empty token is always present so that Token::default() never
        // has to take the write lock
        registry.insert("");
        RwLock::new(registry)
    };
}

/// An interned, comparable, hashable name.
///
/// Two tokens created from equal strings refer to the same interned storage,
/// so equality is usually a pointer comparison. Ordering and hashing are by
/// content,
/// which keeps `Token` usable as a sorted map key with the order callers
/// expect from the underlying string.
#[derive(Copy, Clone)]
pub struct Token(&'static str);

impl Token {
    /// Interns `name` if it has not been seen before and returns the token
    /// for it. Repeated calls with equal strings return identical tokens.
    pub fn new(name: &str) -> Self {
        {
            let registry = TOKEN_REGISTRY.read();
            if let Some(interned) = registry.get(name) {
                return Token(*interned);
            }
        }

        let mut registry = TOKEN_REGISTRY.write();
        // Another writer may have interned this string while we were waiting
        // for the write lock
        if let Some(interned) = registry.get(name) {
            return Token(*interned);
        }

        let interned: &'static str = Box::leak(name.to_string().into_boxed_str());
        registry.insert(interned);
        Token(interned)
    }

    /// The empty token. Present in the registry from process start.
    pub fn empty() -> Self {
        Token("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::empty()
    }
}

impl PartialEq for Token {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // Interning keeps one storage location per distinct string, so
        // pointer identity is the common fast path. Tokens built from
        // literals (`empty`) still compare correctly through the fallback.
        std::ptr::eq(self.0, other.0) || self.0 == other.0
    }
}

impl Eq for Token {}

impl Ord for Token {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.0.cmp(other.0)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.0.hash(state);
    }
}

impl std::fmt::Debug for Token {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        write!(f, "Token({:?})", self.0)
    }
}

impl std::fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl From<&str> for Token {
    fn from(name: &str) -> Self {
        Token::new(name)
    }
}

#[cfg(feature = "serde-support")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(feature = "serde-support")]
impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Token::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings_intern_to_same_token() {
        let a = Token::new("materialOverride");
        let b = Token::new("materialOverride");
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn test_distinct_strings_are_distinct_tokens() {
        let a = Token::new("interfaceValues");
        let b = Token::new("interfaceValuez");
        assert_ne!(a, b);
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let a = Token::new("alpha");
        let b = Token::new("beta");
        assert!(a < b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_default_is_empty() {
        let token = Token::default();
        assert!(token.is_empty());
        assert_eq!(token, Token::empty());
        assert_eq!(token, Token::new(""));
    }

    #[test]
    fn test_display() {
        let token = Token::new("colorSpace");
        assert_eq!(format!("{}", token), "colorSpace");
    }

    #[test]
    fn test_usable_as_hash_key() {
        let mut map = fnv::FnvHashMap::default();
        map.insert(Token::new("a"), 1);
        map.insert(Token::new("b"), 2);
        assert_eq!(map.get(&Token::new("a")), Some(&1));
        assert_eq!(map.get(&Token::new("c")), None);
    }
}

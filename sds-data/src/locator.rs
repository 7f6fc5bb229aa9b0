//! Locator paths.
//!
//! A locator is a pure value naming a nested field within a container
//! hierarchy, e.g. `materialOverride/interfaceValues`, without holding a
//! live reference to it. External consumers (change-invalidation systems
//! and the like) use locators as map keys and comparison values.

use sds_base::Token;

/// An immutable ordered sequence of tokens addressing a nested field. The
/// empty locator denotes the root of a container tree.
///
/// Equality is structural and ordering is lexicographic over the token
/// sequence, so locators are usable as sorted map keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSourceLocator {
    elements: Vec<Token>,
}

impl DataSourceLocator {
    /// The empty locator, addressing the root of a container tree.
    pub fn empty() -> Self {
        Default::default()
    }

    /// A single-element locator.
    pub fn from_token(token: Token) -> Self {
        DataSourceLocator {
            elements: vec![token],
        }
    }

    /// A locator carrying `tokens` in order.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        DataSourceLocator {
            elements: tokens.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.elements
    }

    pub fn first(&self) -> Option<Token> {
        self.elements.first().copied()
    }

    pub fn last(&self) -> Option<Token> {
        self.elements.last().copied()
    }

    /// Returns a new locator with `token` appended. The receiver is
    /// untouched; locators have value semantics.
    pub fn append(
        &self,
        token: Token,
    ) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(token);
        DataSourceLocator { elements }
    }

    /// Returns a new locator truncated to the first `len` elements. A `len`
    /// of zero yields the empty locator; a `len` at or beyond the current
    /// length yields an unchanged copy.
    pub fn truncate(
        &self,
        len: usize,
    ) -> Self {
        DataSourceLocator {
            elements: self.elements[..len.min(self.elements.len())].to_vec(),
        }
    }

    /// True if `prefix` is an element-wise prefix of this locator. Every
    /// locator has the empty locator as a prefix.
    pub fn has_prefix(
        &self,
        prefix: &DataSourceLocator,
    ) -> bool {
        self.elements.len() >= prefix.elements.len()
            && self.elements[..prefix.elements.len()] == prefix.elements[..]
    }
}

impl std::fmt::Display for DataSourceLocator {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        for (i, token) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_equals_direct_construction() {
        let a = Token::new("materialOverride");
        let b = Token::new("interfaceValues");
        assert_eq!(
            DataSourceLocator::from_token(a).append(b),
            DataSourceLocator::from_tokens(&[a, b])
        );
    }

    #[test]
    fn test_append_does_not_mutate_receiver() {
        let root = DataSourceLocator::from_token(Token::new("materialOverride"));
        let _child = root.append(Token::new("interfaceValues"));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn test_empty_locator_is_root() {
        let locator = DataSourceLocator::empty();
        assert!(locator.is_empty());
        assert_eq!(locator, DataSourceLocator::default());
        assert_eq!(format!("{}", locator), "");
    }

    #[test]
    fn test_display_is_slash_joined() {
        let locator = DataSourceLocator::from_tokens(&[
            Token::new("materialOverride"),
            Token::new("interfaceValues"),
        ]);
        assert_eq!(format!("{}", locator), "materialOverride/interfaceValues");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = DataSourceLocator::from_tokens(&[Token::new("a")]);
        let ab = DataSourceLocator::from_tokens(&[Token::new("a"), Token::new("b")]);
        let b = DataSourceLocator::from_tokens(&[Token::new("b")]);
        assert!(a < ab);
        assert!(ab < b);
    }

    #[test]
    fn test_has_prefix() {
        let root = DataSourceLocator::empty();
        let a = DataSourceLocator::from_token(Token::new("a"));
        let ab = a.append(Token::new("b"));

        assert!(ab.has_prefix(&a));
        assert!(ab.has_prefix(&root));
        assert!(ab.has_prefix(&ab));
        assert!(!a.has_prefix(&ab));
    }

    #[test]
    fn test_truncate() {
        let ab = DataSourceLocator::from_tokens(&[Token::new("a"), Token::new("b")]);
        assert_eq!(ab.truncate(1), DataSourceLocator::from_token(Token::new("a")));
        assert_eq!(ab.truncate(0), DataSourceLocator::empty());
        assert_eq!(ab.truncate(5), ab);
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(DataSourceLocator::from_token(Token::new("a")), 1);
        map.insert(DataSourceLocator::empty(), 0);
        assert_eq!(map.get(&DataSourceLocator::from_token(Token::new("a"))), Some(&1));
    }
}

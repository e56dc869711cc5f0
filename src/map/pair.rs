//! Detached key-value pairs.
//!
//! A [`Pair`] is the owned value handed back by a map's removal operations.
//! Once returned it has no remaining connection to the map it came from:
//! the map holds no reference to it and is unaffected by anything the
//! caller does with it.

use std::fmt;

// =============================================================================
// Pair Definition
// =============================================================================

/// An owned key-value pair detached from a map.
///
/// Produced by `remove` and `remove_any` on [`HashPairMap`](super::HashPairMap)
/// and [`TreePairMap`](super::TreePairMap). The pair is a plain value: it can
/// be inspected in place, torn into its parts, or converted to and from a
/// `(K, V)` tuple.
///
/// # Examples
///
/// ```rust
/// use pairmap::map::Pair;
///
/// let pair = Pair::from(("answer".to_string(), 42));
/// assert_eq!(pair.key(), "answer");
/// assert_eq!(*pair.value(), 42);
///
/// let (key, value) = pair.into_parts();
/// assert_eq!(key, "answer");
/// assert_eq!(value, 42);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from a key and a value.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairmap::map::Pair;
    ///
    /// let pair = Pair::new("a", 1);
    /// assert_eq!(*pair.key(), "a");
    /// ```
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairmap::map::Pair;
    ///
    /// let pair = Pair::new("a", 1);
    /// assert_eq!(*pair.value(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the pair, returning its key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairmap::map::Pair;
    ///
    /// let pair = Pair::new("a", 1);
    /// assert_eq!(pair.into_parts(), ("a", 1));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> From<(K, V)> for Pair<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    #[inline]
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_parts()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Pair<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Pair")
            .field(&self.key)
            .field(&self.value)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

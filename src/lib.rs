//! # pairmap
//!
//! Mutable associative containers whose removal operations hand detached
//! key-value pairs back to the caller.
//!
//! ## Overview
//!
//! This library provides in-memory maps built around a small, contract-checked
//! operation set. A map owns a finite collection of key-value pairs in which
//! no two pairs share a key; removing an entry detaches it from the map and
//! returns it to the caller as an owned [`Pair`](map::Pair). It includes:
//!
//! - **`HashPairMap`**: separate-chaining hash table, for `K: Hash + Eq`
//! - **`TreePairMap`**: AVL-balanced search tree, for `K: Ord`
//! - **`Pair`**: the detached key-value pair returned by removals
//!
//! Both map types satisfy the same contract, so either can stand in for the
//! other wherever the key type supports it. Equality between maps is
//! structural: two maps are equal exactly when they hold the same pairs,
//! regardless of how each was built or how its entries are laid out.
//!
//! Calls that violate an operation's documented preconditions (adding a
//! duplicate key, removing an absent one, removing from an empty map) are
//! programming errors and panic; they are never reported through a `Result`.
//!
//! ## Feature Flags
//!
//! - `hash`: the hash-table-backed map (enabled by default)
//! - `ordered`: the tree-backed map (enabled by default)
//! - `fxhash`: hash entries with `rustc-hash`'s `FxHasher`
//! - `ahash`: hash entries with `ahash`'s `AHasher`
//! - `full`: enable all container features
//!
//! ## Example
//!
//! ```rust
//! use pairmap::prelude::*;
//!
//! let mut map = HashPairMap::new();
//! map.add("one".to_string(), 1);
//! map.add("two".to_string(), 2);
//!
//! assert!(map.has_key("one"));
//! assert_eq!(map.value("two"), &2);
//!
//! let pair = map.remove("one");
//! assert_eq!(pair.key(), "one");
//! assert_eq!(map.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use pairmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::map::*;
}

pub mod map;

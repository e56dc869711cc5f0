//! Mutable maps with detaching removal.
//!
//! This module provides associative containers that own a finite set of
//! key-value pairs in which no two pairs share a key:
//!
//! - [`HashPairMap`]: separate-chaining hash table (`K: Hash + Eq`)
//! - [`TreePairMap`]: AVL-balanced search tree (`K: Ord`)
//! - [`Pair`]: an owned key-value pair detached from a map by removal
//!
//! # Contract
//!
//! Both map types expose the same operations with the same meaning:
//!
//! | Operation    | Effect                                              |
//! |--------------|-----------------------------------------------------|
//! | `new`        | construct the empty map                             |
//! | `add`        | insert a pair whose key is not yet present          |
//! | `remove`     | detach and return the pair with a present key       |
//! | `remove_any` | detach and return some pair from a non-empty map    |
//! | `value`      | borrow the value stored under a present key         |
//! | `has_key`    | test key membership                                 |
//! | `len`        | number of pairs currently held                      |
//!
//! `add`, `remove`, `remove_any`, and `value` state preconditions; calling
//! them outside those preconditions is a caller bug and panics before the
//! map is mutated. `has_key`, `len`, and the `Option`-returning `get` are
//! total and never panic.
//!
//! # Structural Equality
//!
//! Two maps are equal exactly when they have the same length and every key
//! of one is present in the other with an equal value. Equality never
//! depends on insertion history, bucket layout, or tree shape:
//!
//! ```rust
//! use pairmap::map::HashPairMap;
//!
//! let mut forward = HashPairMap::new();
//! forward.add("a", 1);
//! forward.add("b", 2);
//!
//! let mut backward = HashPairMap::new();
//! backward.add("b", 2);
//! backward.add("a", 1);
//!
//! assert_eq!(forward, backward);
//! ```
//!
//! # Detached Pairs
//!
//! Removal transfers ownership out of the map. The returned [`Pair`] is an
//! independent value; holding it, mutating the map afterward, or dropping
//! either one has no effect on the other:
//!
//! ```rust
//! use pairmap::map::TreePairMap;
//!
//! let mut map = TreePairMap::new();
//! map.add(1, "one");
//! map.add(2, "two");
//!
//! let pair = map.remove(&1);
//! assert_eq!(pair.into_parts(), (1, "one"));
//! assert!(!map.has_key(&1));
//! ```

mod pair;

#[cfg(feature = "hash")]
mod hashmap;
#[cfg(feature = "ordered")]
mod treemap;

pub use pair::Pair;

#[cfg(feature = "hash")]
pub use hashmap::HashPairMap;
#[cfg(feature = "hash")]
pub use hashmap::HashPairMapIntoIterator;
#[cfg(feature = "hash")]
pub use hashmap::HashPairMapIterator;

#[cfg(feature = "ordered")]
pub use treemap::TreePairMap;
#[cfg(feature = "ordered")]
pub use treemap::TreePairMapIntoIterator;
#[cfg(feature = "ordered")]
pub use treemap::TreePairMapIterator;

//! Common map operations: keys, values, merge, delete and keep.
//!
//! ```
//! use std::collections::HashMap;
//! use zen::mapx;
//!
//! let merged = mapx::merge([
//!     HashMap::from([("a", 1), ("b", 2)]),
//!     HashMap::from([("b", 3), ("c", 4)]),
//! ]);
//! assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
//! ```

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

/// Returns the map's keys, in iteration order.
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns the map's values, in iteration order.
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Merges maps into a new one. Later maps override earlier keys.
pub fn merge<K, V, S, I>(maps: I) -> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
    I: IntoIterator<Item = HashMap<K, V, S>>,
{
    let mut merged = HashMap::default();
    for map in maps {
        merged.extend(map);
    }
    merged
}

/// Removes the given keys, returning the map for chaining.
pub fn delete<'a, K, V, S>(map: &'a mut HashMap<K, V, S>, keys: &[K]) -> &'a mut HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    for key in keys {
        map.remove(key);
    }
    map
}

/// Removes every key that is not in `keys`, returning the map for chaining.
pub fn keep<'a, K, V, S>(map: &'a mut HashMap<K, V, S>, keys: &[K]) -> &'a mut HashMap<K, V, S>
where
    K: Eq,
{
    map.retain(|k, _| keys.contains(k));
    map
}

//! Fast hashing aliases.
//!
//! Graph interning and adjacency bookkeeping are hash-heavy; `ahash` over
//! `hashbrown` keeps lookups cheap without pulling in a cryptographic hasher.

/// Hash map keyed with the `ahash` hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set keyed with the `ahash` hasher.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

//! # Cache Trait Hierarchy
//!
//! This module defines the trait hierarchy for the cache, providing a unified
//! interface over the frequency-based policy while keeping the operation set
//! honest about what each layer can do.
//!
//! ## Architecture
//!
//! ```text
//!          ┌─────────────────────────────────────────┐
//!          │            CoreCache<K, V>              │
//!          │                                         │
//!          │  insert(&mut, K, V) → Option<V>         │
//!          │  get(&mut, &K) → Option<&V>             │
//!          │  contains(&, &K) → bool                 │
//!          │  len(&) → usize                         │
//!          │  is_empty(&) → bool                     │
//!          │  capacity(&) → usize                    │
//!          │  clear(&mut)                            │
//!          └──────────────────┬──────────────────────┘
//!                             │
//!                             ▼
//!          ┌─────────────────────────────────────────┐
//!          │          MutableCache<K, V>             │
//!          │                                         │
//!          │  remove(&K) → Option<V>                 │
//!          │  remove_batch(&[K]) → Vec<Option<V>>    │
//!          └──────────────────┬──────────────────────┘
//!                             │
//!                             ▼
//!          ┌─────────────────────────────────────────┐
//!          │         LfuCacheTrait<K, V>             │
//!          │                                         │
//!          │  pop_lfu() → Option<(K, V)>             │
//!          │  peek_lfu() → Option<(&K, &V)>          │
//!          │  frequency(&K) → Option<u64>            │
//!          └─────────────────────────────────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait           | Extends        | Purpose                              |
//! |-----------------|----------------|--------------------------------------|
//! | `CoreCache`     | -              | Universal cache operations           |
//! | `MutableCache`  | `CoreCache`    | Adds arbitrary key removal           |
//! | `LfuCacheTrait` | `MutableCache` | LFU-specific with frequency tracking |
//!
//! ## Example Usage
//!
//! ```
//! use lfukit::policy::lfu::LfuCache;
//! use lfukit::traits::{CoreCache, LfuCacheTrait, MutableCache};
//!
//! // Function accepting any cache
//! fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
//!     for (key, value) in data {
//!         cache.insert(*key, value.clone());
//!     }
//! }
//!
//! // Function requiring removal capability
//! fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     for key in keys {
//!         cache.remove(key);
//!     }
//! }
//!
//! let mut cache = LfuCache::with_capacity(100);
//! warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
//! invalidate_keys(&mut cache, &[1]);
//! assert_eq!(cache.len(), 1);
//! ```

/// Core cache operations that all caches support.
///
/// This trait defines the fundamental operations that make sense for any cache
/// type, regardless of eviction policy. All policy-specific traits extend this.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::with_capacity(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, an entry may be evicted according to the
    /// cache's eviction policy before the new entry is inserted.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    ///
    /// // New key returns None
    /// assert_eq!(cache.insert(1, "first"), None);
    ///
    /// // Existing key returns previous value
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update internal state (access frequency, recency) depending on the
    /// eviction policy. Use [`contains`](Self::contains) if you only need
    /// to check existence without affecting eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    ///
    /// Unlike [`get`](Self::get), this does not affect eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "value");
    ///
    /// assert!(cache.contains(&1));
    /// assert!(!cache.contains(&99));
    /// ```
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// assert_eq!(cache.len(), 0);
    ///
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// assert_eq!(cache.len(), 2);
    /// ```
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache: LfuCache<u64, &str> = LfuCache::with_capacity(10);
    /// assert!(cache.is_empty());
    ///
    /// cache.insert(1, "value");
    /// assert!(!cache.is_empty());
    /// ```
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let cache: LfuCache<u64, &str> = LfuCache::with_capacity(100);
    /// assert_eq!(cache.capacity(), 100);
    /// ```
    fn capacity(&self) -> usize;

    /// Removes all entries from the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// assert_eq!(cache.len(), 2);
    ///
    /// cache.clear();
    /// assert!(cache.is_empty());
    /// ```
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// This trait extends [`CoreCache`] with the ability to remove entries by key.
/// Appropriate for policies where arbitrary removal doesn't violate eviction
/// semantics.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::{CoreCache, MutableCache};
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LfuCache::with_capacity(100);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// cache.insert(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::{CoreCache, MutableCache};
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "value");
    ///
    /// assert_eq!(cache.remove(&1), Some("value"));
    /// assert_eq!(cache.remove(&1), None);  // Already removed
    /// ```
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys efficiently.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    /// The default implementation loops over [`remove`](Self::remove).
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::{CoreCache, MutableCache};
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// cache.insert(3, "three");
    ///
    /// let removed = cache.remove_batch(&[1, 99, 3]);
    /// assert_eq!(removed, vec![Some("one"), None, Some("three")]);
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LFU-specific operations that respect frequency order.
///
/// This trait extends [`MutableCache`] with LFU-specific eviction and frequency
/// tracking operations. Entries are ordered by access frequency; among entries
/// with the same frequency, the least recently used one is evicted first.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::{CoreCache, LfuCacheTrait};
///
/// let mut cache = LfuCache::with_capacity(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
/// cache.insert(3, "third");
///
/// // Access key 1 multiple times
/// cache.get(&1);
/// cache.get(&1);
/// cache.get(&1);
///
/// // Key 1 now has frequency 4 (1 insert + 3 gets)
/// assert_eq!(cache.frequency(&1), Some(4));
///
/// // Key 2 has frequency 1 (just insert)
/// assert_eq!(cache.frequency(&2), Some(1));
///
/// // Pop LFU: keys 2 and 3 both have freq=1, key 2 is least recent
/// assert_eq!(cache.pop_lfu(), Some((2, "second")));
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least frequently used entry.
    ///
    /// If multiple entries share the lowest frequency, the least recently
    /// used among them is removed. Returns `None` if the cache is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // Access key 2 to increase its frequency
    /// cache.get(&2);
    ///
    /// // Key 1 is LFU (freq=1 vs freq=2)
    /// let (key, _) = cache.pop_lfu().unwrap();
    /// assert_eq!(key, 1);
    /// ```
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Peeks at the LFU entry without removing it.
    ///
    /// Returns `None` if the cache is empty. Does not increment frequency.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    /// cache.get(&2);  // freq=2
    ///
    /// // Key 1 is LFU
    /// assert_eq!(cache.peek_lfu(), Some((&1, &"first")));
    /// assert_eq!(cache.len(), 2);
    /// ```
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Gets the access frequency for a key.
    ///
    /// Returns `None` if the key is not found. Does not count as an access.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::with_capacity(10);
    /// cache.insert(1, "value");
    /// assert_eq!(cache.frequency(&1), Some(1));
    ///
    /// cache.get(&1);
    /// assert_eq!(cache.frequency(&1), Some(2));
    ///
    /// assert_eq!(cache.frequency(&99), None);
    /// ```
    fn frequency(&self, key: &K) -> Option<u64>;
}

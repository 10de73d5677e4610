//! lfukit: constant-time LFU caching primitives.
//!
//! The crate is split into a data-structure layer ([`ds`]) providing the
//! arena-backed intrusive list the cache is built from, and a policy layer
//! ([`policy`]) providing [`LfuCache`](policy::lfu::LfuCache) itself.
//!
//! ```
//! use lfukit::policy::lfu::LfuCache;
//! use lfukit::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache = LfuCache::with_capacity(2);
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.get(&1);
//!
//! // Key 2 is the least frequently used and is evicted first.
//! cache.insert(3, "three");
//! assert!(!cache.contains(&2));
//! assert_eq!(cache.frequency(&1), Some(2));
//! ```

pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

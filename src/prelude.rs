pub use crate::ds::{IntrusiveList, ListCore, SlotArena, SlotId};
pub use crate::policy::lfu::{DEFAULT_CAPACITY, LfuCache};
pub use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

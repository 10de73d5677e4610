pub mod lfu;

pub use lfu::{DEFAULT_CAPACITY, LfuCache};

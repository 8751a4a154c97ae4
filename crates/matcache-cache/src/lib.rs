//! # Matcache Cache
//!
//! 單槽快取與逆矩陣記憶化

pub mod cell;
pub mod memo;

// Re-export 主要類型
pub use cell::CacheCell;
pub use memo::{cached_inverse, cached_inverse_default, CACHE_HIT_MESSAGE};

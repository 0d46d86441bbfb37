//! A separate-chaining hash map and hash set with dynamic bucket resizing.
//!
//! The core is [`raw::RawTable`]: a bucket array of pool-allocated entry
//! chains that grows and shrinks itself against a hysteresis band so that
//! neither growth nor shrink can oscillate on a single insert/remove.
//! [`map::HashMap`] and [`set::HashSet`] are two API skins over the same
//! engine; a set is a map whose value slot is `()`.
//!
//! Single-threaded, with unspecified (but deterministic between mutations)
//! iteration order. This crate carries no `Send`/`Sync` impls and makes no
//! ordering or persistence guarantees.

/// Standard hash/equality families: pointer-identity, integer, fixed
/// `[u32; 4]` quad, NUL-terminated byte string, composite pair.
pub mod hash;
/// The map container and its map-shaped set algebra.
pub mod map;
/// The set container, the N-ary set algebra, and table relations.
pub mod set;

/// Chunked entry-record allocator consumed by [`raw::RawTable`].
mod pool;
/// Bucket array, resize engine, iteration, set algebra, and relations.
mod raw;

pub use hash::DefaultHashBuilder;
pub use map::HashMap;
pub use raw::TableFlags;
pub use set::HashSet;

//! In-memory store implementations backed by `DashMap`.
//!
//! Uniqueness is enforced with the map's entry API, so concurrent inserts
//! of the same key resolve to exactly one winner just as a database
//! `UNIQUE` constraint would.

pub mod link;
pub mod user;

pub use link::MemoryLinkStore;
pub use user::MemoryUserStore;

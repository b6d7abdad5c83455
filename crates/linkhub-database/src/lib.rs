//! # linkhub-database
//!
//! Storage for LinkHub. Defines the [`UserStore`] and [`LinkStore`]
//! capabilities the services depend on, with PostgreSQL repositories for
//! production and in-memory stores for tests and local runs.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{MemoryLinkStore, MemoryUserStore};
pub use repositories::{LinkRepository, UserRepository};
pub use store::{LinkStore, UserStore};

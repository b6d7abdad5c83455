//! # linkhub-service
//!
//! Business logic service layer for LinkHub. Each service orchestrates
//! the storage capabilities and authentication primitives to implement
//! application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod link;

pub use account::{AccountService, LoginResult};
pub use context::AuthPrincipal;
pub use link::{AlphanumericGenerator, LinkService, ShortCodeGenerator};

//! PostgreSQL repository implementations of the store traits.

pub mod link;
pub mod user;

pub use link::LinkRepository;
pub use user::UserRepository;

//! Short link domain entities.

pub mod model;

pub use model::{CreateLink, ShortLink};

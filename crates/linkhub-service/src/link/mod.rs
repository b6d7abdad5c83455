//! Short link management and resolution.

pub mod code;
pub mod service;

pub use code::{AlphanumericGenerator, ShortCodeGenerator};
pub use service::LinkService;

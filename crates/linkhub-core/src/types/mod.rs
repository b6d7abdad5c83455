//! Core type definitions used across the LinkHub workspace.

pub mod id;

pub use id::*;

//! # linkhub-entity
//!
//! Domain entity models for LinkHub. Every struct in this crate represents
//! a database table row or the data needed to insert one. Row types derive
//! `sqlx::FromRow`.

pub mod link;
pub mod user;

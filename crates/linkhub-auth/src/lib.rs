//! # linkhub-auth
//!
//! Authentication primitives for LinkHub.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-limited session token issuing and verification
//! - `password`: Argon2id password hashing and credential policy

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, SessionToken};
pub use password::{CredentialValidator, PasswordHasher};

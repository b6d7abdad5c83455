//! Unified application error types for LinkHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Each error carries an [`ErrorKind`]
//! that the HTTP layer turns into a status code, and a message that is safe
//! to show to the caller unless the kind is internal.

use std::fmt;
use thiserror::Error;

/// Message returned for both unknown usernames and wrong passwords.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Message returned for every rejected session token.
pub const INVALID_TOKEN_MESSAGE: &str = "Unauthorized";

/// Message substituted for internal error details at the API boundary.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// Registration attempted with a username that is already taken.
    DuplicateUsername,
    /// Login failed. Unknown user and wrong password are indistinguishable.
    InvalidCredentials,
    /// Session token missing, malformed, expired, or badly signed.
    InvalidToken,
    /// The requested resource was not found.
    NotFound,
    /// The caller is authenticated but does not own the resource.
    Forbidden,
    /// A storage uniqueness constraint rejected a write.
    Conflict,
    /// The short-code generator ran out of attempts.
    CapacityExhausted,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether errors of this kind hide their message from clients.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database | Self::Configuration | Self::Serialization | Self::Internal
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::DuplicateUsername => write!(f, "DUPLICATE_USERNAME"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::CapacityExhausted => write!(f, "CAPACITY_EXHAUSTED"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout LinkHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a duplicate-username error.
    pub fn duplicate_username() -> Self {
        Self::new(ErrorKind::DuplicateUsername, "Username already exists")
    }

    /// Create an invalid-credentials error.
    ///
    /// The message is fixed so that responses cannot be used to probe
    /// which usernames exist.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE)
    }

    /// Create an invalid-token error with the fixed public message.
    pub fn invalid_token() -> Self {
        Self::new(ErrorKind::InvalidToken, INVALID_TOKEN_MESSAGE)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an ownership error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a storage conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a capacity-exhausted error.
    pub fn capacity_exhausted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityExhausted, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this error was raised by a uniqueness constraint.
    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorKind::Conflict
    }

    /// The message that may be shown to a client.
    pub fn public_message(&self) -> &str {
        if self.kind.is_internal() {
            INTERNAL_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

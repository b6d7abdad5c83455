//! Credential policy for registration.

use linkhub_core::config::AuthConfig;
use linkhub_core::error::AppError;

/// Validates usernames and passwords against configured limits.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    /// Maximum username length, in characters.
    username_max_length: usize,
    /// Minimum password length, in characters.
    password_min_length: usize,
}

impl CredentialValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            username_max_length: config.username_max_length,
            password_min_length: config.password_min_length,
        }
    }

    /// Validates a username/password pair, reporting the first violation.
    pub fn validate(&self, username: &str, password: &str) -> Result<(), AppError> {
        self.validate_username(username)?;
        self.validate_password(password)
    }

    /// Username must be non-blank and no longer than the configured maximum.
    pub fn validate_username(&self, username: &str) -> Result<(), AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if username.chars().count() > self.username_max_length {
            return Err(AppError::validation(format!(
                "Username must be at most {} characters long",
                self.username_max_length
            )));
        }
        Ok(())
    }

    /// Password must meet the configured minimum length.
    pub fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        Ok(())
    }
}

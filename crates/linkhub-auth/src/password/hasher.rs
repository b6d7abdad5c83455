//! Argon2id password hashing with a fixed cost.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use linkhub_core::error::AppError;

/// Memory cost in KiB.
const MEMORY_COST_KIB: u32 = 19 * 1024;
/// Number of passes.
const TIME_COST: u32 = 2;
/// Degree of parallelism.
const PARALLELISM: u32 = 1;

/// Hashes and verifies user passwords.
///
/// New hashes always use the cost above. Stored hashes are verified with the
/// parameters recorded in their PHC string, so raising the cost later does
/// not lock out existing accounts.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None).unwrap_or_default();
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hashes `password` with a fresh random salt into a PHC string.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Checks `password` against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`; only an unreadable hash is an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Spends the same work as a verification without any stored hash.
    ///
    /// Used on login for unknown usernames so response time does not reveal
    /// whether an account exists.
    pub fn verify_nothing(&self, password: &str) {
        let salt = SaltString::generate(&mut OsRng);
        let _ = self.argon2.hash_password(password.as_bytes(), &salt);
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

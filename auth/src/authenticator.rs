use chrono::DateTime;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::IdentityClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SigningConfig;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Verified against when a login names an unknown account, so that branch
/// costs one hash computation like a wrong password does.
const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-accounts";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    dummy_hash: String,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// When the access token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing` - Token signing settings
    /// * `password_hasher` - Hasher carrying the configured work factor
    ///
    /// # Returns
    /// Configured Authenticator instance
    ///
    /// # Errors
    /// * `PasswordError` - The hash used for unknown accounts could not be computed
    pub fn new(
        signing: &SigningConfig,
        password_hasher: PasswordHasher,
    ) -> Result<Self, PasswordError> {
        // Computed up front so no login pays for it
        let dummy_hash = password_hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            jwt_handler: JwtHandler::new(signing),
            dummy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password is empty or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `identity` - Identity to bind into the token
    ///
    /// # Returns
    /// AuthenticationResult with access token and its expiry
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &IdentityClaims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let issued = self.jwt_handler.issue(identity)?;

        Ok(AuthenticationResult {
            access_token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Performs one throwaway verification first so the caller spends about
    /// as long as on a wrong password.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, &self.dummy_hash);

        AuthenticationError::InvalidCredentials
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.validate(token)
    }
}

//! Authentication utilities library
//!
//! Provides the authentication core for the user service:
//! - Password hashing (Argon2id)
//! - Session token issuance and validation (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{IdentityClaims, JwtHandler, SigningConfig};
//!
//! let handler = JwtHandler::new(&SigningConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     issuer: "abank-api".to_string(),
//!     audience: "abank-clients".to_string(),
//!     expiration_hours: 24,
//! });
//! let issued = handler.issue(&IdentityClaims::new(1, "juan@correo.com", "Juan Pérez")).unwrap();
//! let claims = handler.validate(&issued.token).unwrap();
//! assert_eq!(claims.sub, "1");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, IdentityClaims, PasswordHasher, SigningConfig};
//!
//! let signing = SigningConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     issuer: "abank-api".to_string(),
//!     audience: "abank-clients".to_string(),
//!     expiration_hours: 24,
//! };
//! let auth = Authenticator::new(&signing, PasswordHasher::new()).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let identity = IdentityClaims::new(1, "juan@correo.com", "Juan Pérez");
//! let result = auth.authenticate("password123", &hash, &identity).unwrap();
//! println!("Token: {} (expires {})", result.access_token, result.expires_at);
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email, "juan@correo.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::IdentityClaims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SigningConfig;
pub use password::HashParams;
pub use password::PasswordError;
pub use password::PasswordHasher;

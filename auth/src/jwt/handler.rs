use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::IdentityClaims;
use super::config::SigningConfig;
use super::errors::JwtError;

/// A freshly signed token and the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// JWT token handler for issuing and validating session tokens.
///
/// Uses HS256 (HMAC with SHA-256). Issuer, audience and lifetime are fixed
/// at construction from the [`SigningConfig`].
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    lifetime: Duration,
    validation: Validation,
}

impl JwtHandler {
    /// Create a new JWT handler from signing settings.
    ///
    /// # Arguments
    /// * `config` - Secret, issuer, audience and token lifetime
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(config: &SigningConfig) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        // No clock skew tolerance: a token is rejected the second after `exp`
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            lifetime: Duration::hours(config.expiration_hours),
            validation,
        }
    }

    /// Issue a signed token for an identity.
    ///
    /// # Arguments
    /// * `identity` - Subject, email and display name to embed
    ///
    /// # Returns
    /// Encoded token and its expiry (`now + lifetime`)
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &IdentityClaims) -> Result<IssuedToken, JwtError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.lifetime;

        let claims = Claims::for_identity(
            identity,
            &self.issuer,
            &self.audience,
            issued_at,
            expires_at,
        );

        let token = self.encode(&claims)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Checks signature, issuer, audience and `nbf <= now <= exp`.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Signature, issuer, audience, timing or format is wrong
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

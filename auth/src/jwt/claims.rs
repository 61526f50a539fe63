use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Facts about an authenticated user that get bound into a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    /// User identifier
    pub subject: String,
    pub email: String,
    /// Display name
    pub name: String,
}

impl IdentityClaims {
    pub fn new(subject: impl ToString, email: impl ToString, name: impl ToString) -> Self {
        Self {
            subject: subject.to_string(),
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

/// Session token payload.
///
/// Registered RFC 7519 claims plus the identity fields. Every field is
/// required, so a token missing any of them fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    pub email: String,

    /// Display name
    pub name: String,

    /// JWT ID (unique per issued token)
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp, equal to `iat`)
    pub nbf: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Build claims for an identity valid over `[issued_at, expires_at]`.
    ///
    /// A fresh `jti` is generated on every call.
    pub fn for_identity(
        identity: &IdentityClaims,
        issuer: &str,
        audience: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: identity.subject.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = iss.to_string();
        self
    }

    /// Set audience.
    pub fn with_audience(mut self, aud: impl ToString) -> Self {
        self.aud = aud.to_string();
        self
    }

    /// Identity facts carried by the token.
    pub fn identity(&self) -> IdentityClaims {
        IdentityClaims {
            subject: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

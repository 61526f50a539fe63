use serde::Deserialize;

/// Token signing settings, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SigningConfig {
    /// HMAC secret (should be at least 32 bytes)
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    /// Token lifetime in hours
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

fn default_expiration_hours() -> i64 {
    24
}

use async_trait::async_trait;

use crate::domain::session::models::Credentials;
use crate::domain::session::models::Session;
use crate::user::errors::UserError;

/// Port for login operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange email and password for a session token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email and plaintext password
    ///
    /// # Returns
    /// Signed token, its expiry and the user it was issued for
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, credentials: Credentials) -> Result<Session, UserError>;
}

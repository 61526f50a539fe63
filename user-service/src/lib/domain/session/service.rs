use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::session::models::Credentials;
use crate::domain::session::models::Session;
use crate::domain::session::ports::AuthServicePort;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Login orchestration: look up by email, verify, issue a token.
///
/// Unknown emails go through the same rejection as a wrong password,
/// including one password verification, so neither the response nor its
/// latency reveals whether an account exists.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<Session, UserError> {
        let Credentials { email, password } = credentials;

        let user = self.repository.find_by_email(&email).await?;

        // Verification is CPU-bound, keep it off the async workers
        let authenticator = Arc::clone(&self.authenticator);
        let outcome = tokio::task::spawn_blocking(move || match user {
            Some(user) => {
                let identity = user.identity();
                let result = authenticator.authenticate(&password, &user.password_hash, &identity);
                result.map(|issued| (issued, user))
            }
            None => Err(authenticator.reject_unknown_account(&password)),
        })
        .await?;

        match outcome {
            Ok((issued, user)) => {
                tracing::info!(user_id = %user.id, "Login succeeded");
                Ok(Session {
                    token: issued.access_token,
                    expires_at: issued.expires_at,
                    user,
                })
            }
            Err(e) => {
                tracing::warn!("Login rejected");
                Err(UserError::from(e))
            }
        }
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::session::models::Credentials;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::user::errors::FieldError;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let session = state
        .auth_service
        .login(body.try_into_credentials()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: session.token,
            expires_at: session.expires_at,
            user: (&session.user).into(),
        },
    ))
}

#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

impl LoginRequestBody {
    /// Malformed payloads are rejected here and never reach the login flow.
    fn try_into_credentials(self) -> Result<Credentials, UserError> {
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(FieldError::Empty { field: "password" }.into());
        }

        Ok(Credentials {
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserData,
}

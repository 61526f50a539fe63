use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::UserData;
use crate::domain::user::models::Address;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::PlainPassword;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON).
///
/// Absent fields and empty strings leave the stored value unchanged.
#[derive(Default, Deserialize)]
pub struct UpdateUserRequest {
    pub first_names: Option<String>,
    pub last_names: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        // Validation happens here - errors are automatically converted via #[from]
        Ok(UpdateUserCommand {
            first_names: provided(self.first_names)
                .map(|v| PersonName::new("first_names", v))
                .transpose()?,
            last_names: provided(self.last_names)
                .map(|v| PersonName::new("last_names", v))
                .transpose()?,
            birth_date: self.birth_date,
            address: provided(self.address).map(Address::new).transpose()?,
            phone: provided(self.phone).map(PhoneNumber::new).transpose()?,
            email: provided(self.email).map(EmailAddress::new).transpose()?,
            password: provided(self.password)
                .map(PlainPassword::new)
                .transpose()?,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    // Parse user ID and request at HTTP boundary - errors automatically converted
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

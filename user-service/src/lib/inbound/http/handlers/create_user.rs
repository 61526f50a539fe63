use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::Address;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::PlainPassword;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn create_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user = state
        .user_service
        .create_user(body.try_into_command()?)
        .await?;

    tracing::debug!(created_by = %caller.user_id, user_id = %user.id, "User created via api");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&user).into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Clone, Deserialize)]
pub struct CreateUserRequest {
    first_names: String,
    last_names: String,
    birth_date: NaiveDate,
    address: String,
    phone: String,
    email: String,
    password: String,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        Ok(CreateUserCommand {
            first_names: PersonName::new("first_names", self.first_names)?,
            last_names: PersonName::new("last_names", self.last_names)?,
            birth_date: self.birth_date,
            address: Address::new(self.address)?,
            phone: PhoneNumber::new(self.phone)?,
            email: EmailAddress::new(self.email)?,
            password: PlainPassword::new(self.password)?,
        })
    }
}

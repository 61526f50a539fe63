use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PlainPassword;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing (shared with login)
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Hash on the blocking pool; Argon2 is deliberately slow.
    async fn hash_password(&self, password: PlainPassword) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await??;
        Ok(hash)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .exists_with_email(&command.email, None)
            .await?
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let new_user = NewUser {
            first_names: command.first_names,
            last_names: command.last_names,
            birth_date: command.birth_date,
            address: command.address,
            phone: command.phone,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let id = self.repository.insert(&new_user).await?;
        let created_user = User::from_new(id, new_user);

        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        // The record being updated keeps its own email without conflicting
        if let Some(new_email) = &command.email {
            if self
                .repository
                .exists_with_email(new_email, Some(*id))
                .await?
            {
                return Err(UserError::EmailAlreadyExists(new_email.to_string()));
            }
        }

        if let Some(first_names) = command.first_names {
            user.first_names = first_names;
        }

        if let Some(last_names) = command.last_names {
            user.last_names = last_names;
        }

        if let Some(birth_date) = command.birth_date {
            user.birth_date = birth_date;
        }

        if let Some(address) = command.address {
            user.address = address;
        }

        if let Some(phone) = command.phone {
            user.phone = phone;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.hash_password(new_password).await?;
        }

        user.modified_at = Some(Utc::now());

        if !self.repository.update(&user).await? {
            return Err(UserError::NotFound(id.to_string()));
        }

        tracing::info!(user_id = %user.id, "User updated");

        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id.to_string()));
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}

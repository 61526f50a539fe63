use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::Address;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str = "id, first_names, last_names, birth_date, address, phone, email, \
                            password_hash, created_at, modified_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, UserError> {
        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            first_names: PersonName::new(
                "first_names",
                row.try_get("first_names").map_err(database_error)?,
            )?,
            last_names: PersonName::new(
                "last_names",
                row.try_get("last_names").map_err(database_error)?,
            )?,
            birth_date: row.try_get("birth_date").map_err(database_error)?,
            address: Address::new(row.try_get("address").map_err(database_error)?)?,
            phone: PhoneNumber::new(row.try_get("phone").map_err(database_error)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(database_error)?)?,
            password_hash: row.try_get("password_hash").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            modified_at: row.try_get("modified_at").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

/// Unique violations on the email constraint become a conflict, everything else a database error.
fn write_error(e: sqlx::Error, email: &EmailAddress) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
            return UserError::EmailAlreadyExists(email.as_str().to_string());
        }
    }
    database_error(e)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_with_email(
        &self,
        email: &EmailAddress,
        exclude: Option<UserId>,
    ) -> Result<bool, UserError> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = $1 AND ($2::INT IS NULL OR id <> $2)
            ) AS taken
            "#,
        )
        .bind(email.as_str())
        .bind(exclude.map(|id| id.0))
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        row.try_get("taken").map_err(database_error)
    }

    async fn insert(&self, user: &NewUser) -> Result<UserId, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users
                (first_names, last_names, birth_date, address, phone, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(user.first_names.as_str())
        .bind(user.last_names.as_str())
        .bind(user.birth_date)
        .bind(user.address.as_str())
        .bind(user.phone.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &user.email))?;

        Ok(UserId(row.try_get("id").map_err(database_error)?))
    }

    async fn update(&self, user: &User) -> Result<bool, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_names = $2, last_names = $3, birth_date = $4, address = $5,
                phone = $6, email = $7, password_hash = $8, modified_at = $9
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(user.first_names.as_str())
        .bind(user.last_names.as_str())
        .bind(user.birth_date)
        .bind(user.address.as_str())
        .bind(user.phone.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &user.email))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}

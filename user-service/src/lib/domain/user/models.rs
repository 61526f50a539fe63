use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::FieldError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered user. `password_hash` is a PHC string and is
/// never exposed through `Debug` or any response type.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub first_names: PersonName,
    pub last_names: PersonName,
    pub birth_date: NaiveDate,
    pub address: Address,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build the stored entity from a freshly inserted record.
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            first_names: new_user.first_names,
            last_names: new_user.last_names,
            birth_date: new_user.birth_date,
            address: new_user.address,
            phone: new_user.phone,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
            modified_at: None,
        }
    }

    /// Full name as shown to other users and embedded in session tokens.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }

    /// Identity facts bound into a session token.
    pub fn identity(&self) -> auth::IdentityClaims {
        auth::IdentityClaims::new(self.id, self.email.as_str(), self.display_name())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_names", &self.first_names)
            .field("last_names", &self.last_names)
            .field("birth_date", &self.birth_date)
            .field("address", &self.address)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("modified_at", &self.modified_at)
            .finish()
    }
}

/// User record not yet persisted; the store assigns the id.
#[derive(Clone)]
pub struct NewUser {
    pub first_names: PersonName,
    pub last_names: PersonName,
    pub birth_date: NaiveDate,
    pub address: Address,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type (store-assigned serial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i32);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - Decimal id to parse
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        match s.parse::<i32>() {
            Ok(id) if id > 0 => Ok(UserId(id)),
            _ => Err(UserIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn bounded(field: &'static str, value: String, max: usize) -> Result<String, FieldError> {
    let length = value.chars().count();
    if value.trim().is_empty() {
        Err(FieldError::Empty { field })
    } else if length > max {
        Err(FieldError::TooLong {
            field,
            max,
            actual: length,
        })
    } else {
        Ok(value)
    }
}

/// First or last names, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 100;

    /// Create a validated name.
    ///
    /// # Arguments
    /// * `field` - Field label used in error messages
    /// * `name` - Raw name
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(field: &'static str, name: String) -> Result<Self, FieldError> {
        bounded(field, name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Postal address, 1-255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    const MAX_LENGTH: usize = 255;

    pub fn new(address: String) -> Result<Self, FieldError> {
        bounded("address", address, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number, 1-20 characters. Format is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MAX_LENGTH: usize = 20;

    pub fn new(phone: String) -> Result<Self, FieldError> {
        bounded("phone", phone, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `TooLong` - Email longer than 100 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that satisfies the length policy (6-120 characters).
///
/// Only lives long enough to be hashed; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    const MIN_LENGTH: usize = 6;
    const MAX_LENGTH: usize = 120;

    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            Ok(Self(password))
        } else {
            Err(PasswordPolicyError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(<redacted>)")
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub first_names: PersonName,
    pub last_names: PersonName,
    pub birth_date: NaiveDate,
    pub address: Address,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    /// Plain text password (will be hashed by service)
    pub password: PlainPassword,
}

/// Command to update an existing user with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub first_names: Option<PersonName>,
    pub last_names: Option<PersonName>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<Address>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<EmailAddress>,
    pub password: Option<PlainPassword>,
}

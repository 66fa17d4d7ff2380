//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Users must have a valid email address")]
    EmptyEmail,

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

impl UserValidationError {
    /// Input field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail | Self::InvalidEmail | Self::EmailTooLong(_) => "email",
            Self::NameTooLong(_) => "name",
            Self::PasswordTooShort(_) | Self::PasswordTooLong(_) => "password",
        }
    }
}

impl From<UserValidationError> for crate::domain::DomainError {
    fn from(e: UserValidationError) -> Self {
        Self::invalid_field(e.field(), e.to_string())
    }
}

const MAX_EMAIL_LENGTH: usize = 255;
const MAX_NAME_LENGTH: usize = 255;
const MIN_PASSWORD_LENGTH: usize = 5;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Normalize an email address by lowercasing its domain part.
///
/// The local part is left untouched since mailbox names may be case
/// sensitive. Input without an `@` is only trimmed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Require an email to be present.
///
/// This is the only check the identity factory applies; format checks belong
/// to the signup endpoint.
pub fn require_email(email: Option<&str>) -> Result<&str, UserValidationError> {
    match email {
        Some(e) if !e.trim().is_empty() => Ok(e),
        _ => Err(UserValidationError::EmptyEmail),
    }
}

/// Validate the shape of an email address
///
/// Rules:
/// - Cannot be empty
/// - Maximum 255 characters
/// - Exactly one `@` with non-empty local and domain parts
/// - Domain contains a dot and no whitespace
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or(UserValidationError::InvalidEmail)?;

    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a display name (may be empty)
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 5 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_domain() {
        assert_eq!(normalize_email("test@TEST.com"), "test@test.com");
        assert_eq!(normalize_email("Test@Example.COM"), "Test@example.com");
    }

    #[test]
    fn test_normalize_email_trims() {
        assert_eq!(normalize_email("  user@Host.io  "), "user@host.io");
    }

    #[test]
    fn test_normalize_email_uses_last_at() {
        assert_eq!(normalize_email("a@b@EXAMPLE.com"), "a@b@example.com");
    }

    #[test]
    fn test_normalize_email_without_at() {
        assert_eq!(normalize_email("NotAnEmail"), "NotAnEmail");
    }

    #[test]
    fn test_require_email() {
        assert_eq!(require_email(Some("a@b.com")), Ok("a@b.com"));
        assert_eq!(require_email(None), Err(UserValidationError::EmptyEmail));
        assert_eq!(require_email(Some("")), Err(UserValidationError::EmptyEmail));
        assert_eq!(require_email(Some("  ")), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("test@test.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(validate_email("plain"), Err(UserValidationError::InvalidEmail));
        assert_eq!(validate_email("@test.com"), Err(UserValidationError::InvalidEmail));
        assert_eq!(validate_email("user@"), Err(UserValidationError::InvalidEmail));
        assert_eq!(validate_email("user@localhost"), Err(UserValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@test.com"), Err(UserValidationError::InvalidEmail));
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@test.com", "a".repeat(250));
        assert_eq!(
            validate_email(&email),
            Err(UserValidationError::EmailTooLong(255))
        );
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("testtest").is_ok());
        assert_eq!(
            validate_password("pw"),
            Err(UserValidationError::PasswordTooShort(5))
        );
        assert_eq!(
            validate_password(&"a".repeat(129)),
            Err(UserValidationError::PasswordTooLong(128))
        );
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(UserValidationError::EmptyEmail.field(), "email");
        assert_eq!(UserValidationError::NameTooLong(255).field(), "name");
        assert_eq!(UserValidationError::PasswordTooShort(5).field(), "password");
    }
}

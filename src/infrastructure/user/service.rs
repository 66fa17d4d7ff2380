//! User service for authentication and user management

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{
    normalize_email, require_email, validate_email, validate_name, validate_password,
    ExtraFields, NewUser, User, UserId, UserRepository,
};
use crate::domain::DomainError;

use super::password::{PasswordHasher, UNUSABLE_PASSWORD};

/// Request for the public signup endpoint
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Changes a user may apply to their own profile
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// User service for authentication and management
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create and save a user with the given email and password.
    ///
    /// Only a missing or empty email is rejected here. The email's domain is
    /// lowercased and a missing password leaves the account without a
    /// usable password.
    pub async fn create_user(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        extra: ExtraFields,
    ) -> Result<User, DomainError> {
        let email = normalize_email(require_email(email)?);

        let password_hash = match password {
            Some(password) => self.hasher.hash(password)?,
            None => UNUSABLE_PASSWORD.to_string(),
        };

        self.repository
            .create(NewUser {
                email,
                password_hash,
                extra,
            })
            .await
    }

    /// Create and save a user with staff and superuser rights
    pub async fn create_superuser(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> Result<User, DomainError> {
        let name = name.unwrap_or_default();
        validate_name(name)?;

        let user = self
            .create_user(email, password, ExtraFields::superuser().with_name(name.trim()))
            .await?;

        info!(user_id = %user.id(), "Created superuser");
        Ok(user)
    }

    /// Validate a signup payload and create the user
    pub async fn register(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let email = normalize_email(require_email(request.email.as_deref())?);
        validate_email(&email)?;

        let password = request
            .password
            .as_deref()
            .ok_or_else(|| DomainError::invalid_field("password", "This field is required."))?;
        validate_password(password)?;

        let name = request.name.unwrap_or_default();
        validate_name(&name)?;

        if self.repository.email_exists(&email).await? {
            return Err(DomainError::conflict(
                "user with this email already exists.",
            ));
        }

        self.create_user(
            Some(&email),
            Some(password),
            ExtraFields::default().with_name(name.trim()),
        )
        .await
    }

    /// Authenticate a user with email and password
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.get_by_email(&normalize_email(email)).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !user.is_active() {
            return Ok(None);
        }

        if !self.check_password(&user, password) {
            return Ok(None);
        }

        self.repository.record_login(user.id()).await?;

        // Re-fetch user to get updated last_login_at
        self.repository.get(user.id()).await
    }

    /// Check a raw password against the user's stored hash
    pub fn check_password(&self, user: &User, password: &str) -> bool {
        self.hasher.verify(password, user.password_hash())
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Update the caller's own name and/or password
    pub async fn update_profile(
        &self,
        id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if let Some(name) = request.name {
            validate_name(&name)?;
            user.set_name(name.trim());
        }

        if let Some(password) = request.password {
            validate_password(&password)?;
            user.set_password_hash(self.hasher.hash(&password)?);
        }

        self.repository.update(&user).await
    }

    /// Count all users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

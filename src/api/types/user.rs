//! Request and response shapes for the user endpoints

use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::infrastructure::user::{CreateUserRequest, UpdateProfileRequest};

/// Signup body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserBody {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl From<CreateUserBody> for CreateUserRequest {
    fn from(body: CreateUserBody) -> Self {
        Self {
            email: body.email,
            password: body.password,
            name: body.name,
        }
    }
}

/// Login body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public view of a user; the password never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            name: user.name().to_string(),
        }
    }
}

/// Partial update of the authenticated user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateMeRequest> for UpdateProfileRequest {
    fn from(body: UpdateMeRequest) -> Self {
        Self {
            name: body.name,
            password: body.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExtraFields, NewUser, UserId};

    #[test]
    fn test_user_response_omits_password() {
        let user = User::new(
            UserId::new(1),
            NewUser {
                email: "test@example.com".to_string(),
                password_hash: "$argon2id$secret".to_string(),
                extra: ExtraFields::default().with_name("Test Name"),
            },
        );

        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();

        assert!(json.contains("\"email\":\"test@example.com\""));
        assert!(json.contains("\"name\":\"Test Name\""));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }
}

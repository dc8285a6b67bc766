use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Database row for a registered user.
///
/// Serializing this struct exposes `hashed_password`. Only the raw-SQL
/// lookup endpoint returns it on purpose, to show what leaks when rows
/// go out verbatim; everything else responds with [`UserResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

/// Registration payload
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Public view of a user, without the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Form-encoded credentials for the token endpoint.
/// The user's name acts as the login.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_rejects_bad_email() {
        let req = CreateUserRequest {
            name: "alice".into(),
            email: "not-an-email".into(),
            password: "correct horse battery".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_user_request_rejects_short_password() {
        let req = CreateUserRequest {
            name: "alice".into(),
            email: "alice@example.com".into(),
            password: "short".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_user_response_drops_password_hash() {
        let user = User {
            id: 1,
            name: "alice".into(),
            email: "alice@example.com".into(),
            hashed_password: "$argon2id$v=19$...".into(),
        };
        let body = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(body.get("hashed_password").is_none());
        assert_eq!(body["email"], "alice@example.com");
    }
}

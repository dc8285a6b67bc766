pub mod item;
pub mod user;

pub use item::{CreateItemRequest, Item};
pub use user::{CreateUserRequest, TokenRequest, TokenResponse, User, UserResponse};

use serde::Deserialize;

/// Offset/limit pagination for listing endpoints
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let page: Pagination = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_pagination_explicit_values() {
        let page: Pagination =
            serde_json::from_value(serde_json::json!({ "skip": 5, "limit": 2 })).unwrap();
        assert_eq!(page.skip, 5);
        assert_eq!(page.limit, 2);
    }
}

pub mod auth;
pub mod csrf;
pub mod health;
pub mod items;
pub mod users;

pub use auth::issue_token;
pub use csrf::issue_csrf_token;
pub use health::health_check;
pub use items::{create_item_for_user, list_items};
pub use users::{
    create_user, delete_user, delete_user_protected, get_current_user, get_user, get_user_by_name,
    get_user_by_name_dynamic, get_user_by_name_raw, list_users, list_users_encoded,
};

pub mod csrf;
pub mod encoding;
pub mod password;
pub mod token;

pub use csrf::CsrfSigner;
pub use encoding::escape_html;
pub use password::{hash_password, verify_password};

pub mod auth_service;
pub mod member_service;

pub use auth_service::is_valid_login;
pub use member_service::fetch_all_members;

pub mod login;
pub mod member;

pub use login::{create_empty_login, LoginEntity, LoginRequest, LoginResponse};
pub use member::MemberEntity;

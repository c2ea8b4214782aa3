pub mod session_context;
pub mod use_login;
pub mod use_members;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_login::{submit_login, use_login, SubmitOutcome, UseLoginHandle};
pub use use_members::{use_members, UseMembersHandle};

pub mod login_state;

pub use login_state::{LoginAction, LoginNotice, LoginPageState, LoginPhase};

pub mod session_store;

pub use session_store::{SessionStore, SubscriptionId, NO_USER};

pub mod app;
pub mod login_screen;
pub mod member_table;
pub mod notification;

pub use app::App;
pub use login_screen::LoginScreen;
pub use member_table::MemberTable;
pub use notification::Notification;

pub mod constants;

pub use constants::BACKEND_URL;

pub mod health;
pub mod scanner;

pub use health::{health_handler, root_handler};
pub use scanner::{scan_email_handler, scan_link_handler, scan_phone_handler, ApiError};

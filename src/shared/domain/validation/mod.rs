mod error;
mod fail_fast;
mod handler;
mod notification;

pub use error::ValidationError;
pub use fail_fast::FailFast;
pub use handler::ValidationHandler;
pub use notification::Notification;

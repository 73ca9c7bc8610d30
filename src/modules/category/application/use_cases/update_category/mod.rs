mod command;
mod handler;
mod result;

pub use command::UpdateCategoryCommand;
pub use handler::UpdateCategoryHandler;
pub use result::UpdateCategoryOutput;

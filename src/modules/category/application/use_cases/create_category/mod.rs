mod command;
mod handler;
mod result;

pub use command::CreateCategoryCommand;
pub use handler::CreateCategoryHandler;
pub use result::CreateCategoryOutput;

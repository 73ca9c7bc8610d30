mod handler;
mod result;

pub use handler::ListCategoriesHandler;
pub use result::CategoryListOutput;

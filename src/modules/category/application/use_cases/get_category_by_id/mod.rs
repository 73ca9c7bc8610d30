mod handler;
mod query;
mod result;

pub use handler::GetCategoryByIdHandler;
pub use query::GetCategoryByIdQuery;
pub use result::CategoryOutput;

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::{
    CreateCategoryHandler, DeleteCategoryHandler, GetCategoryByIdHandler, ListCategoriesHandler,
    UpdateCategoryHandler,
};
pub use domain::{Category, CategoryEvent, CategoryGateway, CategoryId};
pub use infrastructure::InMemoryCategoryGateway;

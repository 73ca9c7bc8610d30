pub mod create_category;
pub mod delete_category;
pub mod get_category_by_id;
pub mod list_categories;
pub mod update_category;

pub use create_category::{CreateCategoryCommand, CreateCategoryHandler, CreateCategoryOutput};
pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler};
pub use get_category_by_id::{CategoryOutput, GetCategoryByIdHandler, GetCategoryByIdQuery};
pub use list_categories::{CategoryListOutput, ListCategoriesHandler};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryHandler, UpdateCategoryOutput};

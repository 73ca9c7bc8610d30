/// Command for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_active,
        }
    }
}

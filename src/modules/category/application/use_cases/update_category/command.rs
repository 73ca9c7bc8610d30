/// Command for updating an existing category
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            is_active,
        }
    }
}

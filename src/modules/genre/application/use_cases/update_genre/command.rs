/// Command for updating an existing genre
#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        is_active: bool,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active,
            categories,
        }
    }
}

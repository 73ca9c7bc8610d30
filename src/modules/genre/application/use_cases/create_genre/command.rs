/// Command for creating a new genre
#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    pub fn new(name: impl Into<String>, is_active: bool, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            is_active,
            categories,
        }
    }
}

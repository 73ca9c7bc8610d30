/// Command for deleting a genre by id
#[derive(Debug, Clone)]
pub struct DeleteGenreCommand {
    pub id: String,
}

impl DeleteGenreCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

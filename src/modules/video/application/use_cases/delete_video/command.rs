/// Command for deleting a video by id
#[derive(Debug, Clone)]
pub struct DeleteVideoCommand {
    pub id: String,
}

impl DeleteVideoCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

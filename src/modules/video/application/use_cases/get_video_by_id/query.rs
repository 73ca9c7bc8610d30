/// Query for fetching one video by id
#[derive(Debug, Clone)]
pub struct GetVideoByIdQuery {
    pub id: String,
}

impl GetVideoByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

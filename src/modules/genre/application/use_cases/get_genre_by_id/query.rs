/// Query for fetching one genre by id
#[derive(Debug, Clone)]
pub struct GetGenreByIdQuery {
    pub id: String,
}

impl GetGenreByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Query for fetching one category by id
#[derive(Debug, Clone)]
pub struct GetCategoryByIdQuery {
    pub id: String,
}

impl GetCategoryByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

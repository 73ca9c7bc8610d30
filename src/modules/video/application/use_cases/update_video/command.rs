/// Command for updating an existing video
#[derive(Debug, Clone)]
pub struct UpdateVideoCommand {
    pub id: String,
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
}

impl UpdateVideoCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: Option<i32>,
        duration: f64,
        opened: bool,
        published: bool,
        rating: Option<String>,
        categories: Vec<String>,
        genres: Vec<String>,
        cast_members: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            opened,
            published,
            rating,
            categories,
            genres,
            cast_members,
        }
    }
}

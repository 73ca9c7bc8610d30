/// Command for creating a new video
///
/// `launched_at` and `rating` stay optional: a missing or unknown value is
/// an expected user input error reported through the notification.
#[derive(Debug, Clone)]
pub struct CreateVideoCommand {
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

impl CreateVideoCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
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

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::{
    CreateVideoHandler, DeleteVideoHandler, GetVideoByIdHandler, ListVideosHandler,
    UpdateVideoHandler,
};
pub use domain::{Rating, Video, VideoEvent, VideoGateway, VideoId};
pub use infrastructure::InMemoryVideoGateway;

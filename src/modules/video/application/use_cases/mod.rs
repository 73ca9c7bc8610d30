pub mod create_video;
pub mod delete_video;
pub mod get_video_by_id;
pub mod list_videos;
pub mod update_video;

pub use create_video::{CreateVideoCommand, CreateVideoHandler, CreateVideoOutput};
pub use delete_video::{DeleteVideoCommand, DeleteVideoHandler};
pub use get_video_by_id::{GetVideoByIdHandler, GetVideoByIdQuery, VideoOutput};
pub use list_videos::{ListVideosHandler, VideoListOutput};
pub use update_video::{UpdateVideoCommand, UpdateVideoHandler, UpdateVideoOutput};

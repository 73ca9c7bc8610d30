pub mod events;
pub mod gateway;
pub mod rating;
pub mod video;

pub use events::VideoEvent;
pub use gateway::VideoGateway;
pub use rating::Rating;
pub use video::{Video, VideoId};

mod handler;
mod result;

pub use handler::ListVideosHandler;
pub use result::VideoListOutput;

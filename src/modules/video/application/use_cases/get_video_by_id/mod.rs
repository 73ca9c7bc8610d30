mod handler;
mod query;
mod result;

pub use handler::GetVideoByIdHandler;
pub use query::GetVideoByIdQuery;
pub use result::VideoOutput;

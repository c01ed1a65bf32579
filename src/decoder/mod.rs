pub mod video;

pub use video::{VideoInfo, VideoStream};

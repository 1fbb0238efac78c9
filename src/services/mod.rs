pub mod bot;
pub mod caption;
pub mod image_source;
pub mod publisher;

pub use bot::Bot;
pub use caption::CaptionGenerator;
pub use image_source::{find_image, FoundImage, HttpImageSource, ImageSource};
pub use publisher::{DirectoryPublisher, Post, Publisher};

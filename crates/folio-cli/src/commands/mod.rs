pub mod content;
pub mod dispatch;
pub mod image_url;
pub mod schema;

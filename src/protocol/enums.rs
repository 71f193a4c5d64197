pub mod download_content;
pub mod download_target;
pub mod upload_source;

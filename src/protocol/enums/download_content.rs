use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadContent {
    File(PathBuf),
    Buffer(Vec<u8>),
}

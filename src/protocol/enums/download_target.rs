use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    File(PathBuf),
    Buffer,
}

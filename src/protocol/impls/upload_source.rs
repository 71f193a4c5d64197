use std::path::Path;
use crate::protocol::enums::upload_source::UploadSource;

impl UploadSource<'_> {
    pub async fn size(&self) -> std::io::Result<u64> {
        match self {
            UploadSource::Buffer(buffer) => Ok(buffer.len() as u64),
            UploadSource::File(path) => Ok(tokio::fs::metadata(path).await?.len()),
        }
    }
}

/// The extension of a local path, without the dot.
pub fn file_ext_name(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

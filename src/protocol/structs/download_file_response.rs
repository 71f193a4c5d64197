use crate::protocol::enums::download_content::DownloadContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFileResponse {
    pub remote_file_id: String,
    pub download_size: u64,
    pub content: DownloadContent,
}

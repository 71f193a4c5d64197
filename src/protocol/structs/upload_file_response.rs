use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadFileResponse {
    pub group_name: String,
    pub remote_file_id: String,
}

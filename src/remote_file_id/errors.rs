use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteFileIdError {
    #[error("InvalidRemoteFileId: '{0}'")]
    InvalidRemoteFileId(String),
}

use std::path::PathBuf;
use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::protocol::errors::ProtocolError;
use crate::registry::errors::RegistryError;
use crate::remote_file_id::errors::RemoteFileIdError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{}: {source}(uploading)", .path.display())]
    LocalFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidRemoteFileId(#[from] RemoteFileIdError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("no tracker server reachable: {0}")]
    NoTracker(#[source] RegistryError),

    #[error("no tracker server configured")]
    NoTrackerConfigured,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl ClientError {
    /// Status code returned by the cluster, if this is a status reply.
    pub fn status(&self) -> Option<u8> {
        match self {
            ClientError::Protocol(error) => error.status(),
            _ => None,
        }
    }
}

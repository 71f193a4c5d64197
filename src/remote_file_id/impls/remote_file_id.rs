use std::fmt;
use std::str::FromStr;
use crate::remote_file_id::errors::RemoteFileIdError;
use crate::remote_file_id::structs::remote_file_id::RemoteFileId;
use crate::remote_file_id::REMOTE_FILE_ID_DELIMITER;

impl RemoteFileId {
    pub fn new(group: &str, path: &str) -> RemoteFileId {
        RemoteFileId {
            group: group.to_string(),
            path: path.to_string(),
        }
    }

    /// Splits on the first delimiter. Both halves must be non-empty.
    pub fn decode(remote_file_id: &str) -> Result<RemoteFileId, RemoteFileIdError> {
        match remote_file_id.split_once(REMOTE_FILE_ID_DELIMITER) {
            Some((group, path)) if !group.is_empty() && !path.is_empty() => {
                Ok(RemoteFileId::new(group, path))
            }
            _ => Err(RemoteFileIdError::InvalidRemoteFileId(remote_file_id.to_string())),
        }
    }

    pub fn encode(group: &str, path: &str) -> String {
        format!("{}{}{}", group, REMOTE_FILE_ID_DELIMITER, path)
    }
}

impl fmt::Display for RemoteFileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, REMOTE_FILE_ID_DELIMITER, self.path)
    }
}

impl FromStr for RemoteFileId {
    type Err = RemoteFileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RemoteFileId::decode(s)
    }
}

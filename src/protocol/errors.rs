use std::time::Duration;
use thiserror::Error;
use crate::pool::errors::PoolError;
use crate::protocol::protocol::status_detail;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("errno [{status}] {context}{}", status_detail(.status))]
    Status { status: u8, context: &'static str },

    #[error("unexpected response command {received}, expected {expected}")]
    UnexpectedCommand { expected: u8, received: u8 },

    #[error("invalid {context} response: {reason}")]
    InvalidBody { context: &'static str, reason: String },

    #[error("network error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context} timed out after {timeout:?}")]
    Timeout { context: &'static str, timeout: Duration },

    #[error(transparent)]
    Pool(#[from] PoolError),
}

impl ProtocolError {
    /// A status reply leaves the stream aligned; everything else besides a checkout failure
    /// does not.
    pub fn is_connection_fatal(&self) -> bool {
        !matches!(self, ProtocolError::Status { .. } | ProtocolError::Pool(_))
    }

    pub fn status(&self) -> Option<u8> {
        match self {
            ProtocolError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

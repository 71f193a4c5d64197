use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        source: std::io::Error,
    },

    #[error("connecting to {address} timed out after {timeout:?}")]
    ConnectTimeout { address: String, timeout: Duration },

    #[error("no address to dial")]
    NoAddress,

    #[error("invalid pool sizing: min_conns {min_conns}, max_conns {max_conns}")]
    InvalidSize { min_conns: usize, max_conns: usize },

    #[error("connection pool for {0} is closed")]
    Closed(String),

    #[error("failed to close connection to {address}: {source}")]
    Close {
        address: String,
        source: std::io::Error,
    },
}

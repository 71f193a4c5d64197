use std::sync::Arc;
use std::time::Duration;
use crate::pool::structs::connection_pool::ConnectionPool;

#[derive(Debug, Clone)]
pub struct StorageClient {
    pub pool: Arc<ConnectionPool>,
    pub network_timeout: Duration,
}

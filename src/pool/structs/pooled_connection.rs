use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::OwnedSemaphorePermit;
use crate::pool::structs::connection_pool::ConnectionPool;

pub struct PooledConnection {
    pub(crate) pool: Arc<ConnectionPool>,
    pub(crate) stream: Option<TcpStream>,
    pub(crate) reusable: bool,
    pub(crate) _permit: OwnedSemaphorePermit,
}

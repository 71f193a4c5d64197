use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::OwnedSemaphorePermit;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pooled_connection::PooledConnection;

impl PooledConnection {
    pub(crate) fn new(pool: Arc<ConnectionPool>, stream: TcpStream, permit: OwnedSemaphorePermit) -> PooledConnection {
        PooledConnection {
            pool,
            stream: Some(stream),
            reusable: true,
            _permit: permit,
        }
    }

    /// The connection is dropped instead of checked back in.
    pub fn mark_broken(&mut self) {
        self.reusable = false;
    }

    pub fn is_reusable(&self) -> bool {
        self.reusable
    }
}

impl Deref for PooledConnection {
    type Target = TcpStream;

    fn deref(&self) -> &TcpStream {
        self.stream.as_ref().expect("stream is only taken on drop")
    }
}

impl DerefMut for PooledConnection {
    fn deref_mut(&mut self) -> &mut TcpStream {
        self.stream.as_mut().expect("stream is only taken on drop")
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.pool.checkin(stream, self.reusable);
        }
    }
}

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::sync::Semaphore;

pub struct ConnectionPool {
    pub(crate) addresses: Vec<String>,
    pub(crate) port: u16,
    pub(crate) min_conns: usize,
    pub(crate) max_conns: usize,
    pub(crate) connect_timeout: Duration,
    pub(crate) idle: Mutex<VecDeque<TcpStream>>,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) live: AtomicUsize,
    pub(crate) closed: AtomicBool,
    pub(crate) next_address: AtomicUsize,
}

impl fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("addresses", &self.addresses)
            .field("port", &self.port)
            .field("min_conns", &self.min_conns)
            .field("max_conns", &self.max_conns)
            .field("live", &self.live.load(Ordering::Relaxed))
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish()
    }
}

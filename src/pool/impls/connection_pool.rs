use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, warn};
use parking_lot::Mutex;
use socket2::{SockRef, TcpKeepalive};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::time::timeout;
use crate::pool::errors::PoolError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::pool::traits::managed_pool::ManagedPool;
use crate::protocol::protocol::FDFS_PROTO_CMD_QUIT;
use crate::protocol::structs::header::Header;

const KEEPALIVE_TIME: Duration = Duration::from_secs(60);

impl ConnectionPool {
    /// Dials `max(min_conns, 1)` connections up front; the pool is only returned when all of
    /// them succeed.
    pub async fn connect(
        addresses: &[String],
        port: u16,
        min_conns: usize,
        max_conns: usize,
        connect_timeout: Duration,
    ) -> Result<Arc<ConnectionPool>, PoolError> {
        if addresses.is_empty() {
            return Err(PoolError::NoAddress);
        }
        if max_conns == 0 || min_conns > max_conns {
            return Err(PoolError::InvalidSize { min_conns, max_conns });
        }

        let pool = ConnectionPool {
            addresses: addresses.to_vec(),
            port,
            min_conns,
            max_conns,
            connect_timeout,
            idle: Mutex::new(VecDeque::new()),
            permits: Arc::new(Semaphore::new(max_conns)),
            live: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
            next_address: AtomicUsize::new(0),
        };

        let initial = min_conns.max(1);
        let mut streams = VecDeque::with_capacity(initial);
        for _ in 0..initial {
            streams.push_back(pool.dial().await?);
        }
        pool.live.store(streams.len(), Ordering::SeqCst);
        *pool.idle.lock() = streams;

        debug!("[POOL] Opened {} connection(s) to {}", initial, pool.endpoint());
        Ok(Arc::new(pool))
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.addresses.join(","), self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn live_connections(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn idle_connections(&self) -> usize {
        self.idle.lock().len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Checks out a connection. Waits while `max_conns` connections are out.
    pub async fn get(self: &Arc<Self>) -> Result<PooledConnection, PoolError> {
        if self.is_closed() {
            return Err(PoolError::Closed(self.endpoint()));
        }
        let permit: OwnedSemaphorePermit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| PoolError::Closed(self.endpoint()))?;

        let idle = self.idle.lock().pop_front();
        let stream = match idle {
            Some(stream) => stream,
            None => {
                let stream = self.dial().await?;
                self.live.fetch_add(1, Ordering::SeqCst);
                debug!("[POOL] Grew {} to {} connection(s)", self.endpoint(), self.live_connections());
                stream
            }
        };
        Ok(PooledConnection::new(Arc::clone(self), stream, permit))
    }

    pub(crate) fn checkin(&self, stream: TcpStream, reusable: bool) {
        let mut idle = self.idle.lock();
        if reusable && !self.closed.load(Ordering::SeqCst) {
            idle.push_back(stream);
            return;
        }
        drop(idle);
        drop(stream);
        self.live.fetch_sub(1, Ordering::SeqCst);
        debug!("[POOL] Discarded a connection to {}, {} left", self.endpoint(), self.live_connections());
    }

    async fn dial(&self) -> Result<TcpStream, PoolError> {
        let start = self.next_address.fetch_add(1, Ordering::Relaxed);
        let mut last_error = PoolError::NoAddress;
        for offset in 0..self.addresses.len() {
            let host = &self.addresses[(start + offset) % self.addresses.len()];
            let address = format!("{}:{}", host, self.port);
            match timeout(self.connect_timeout, TcpStream::connect((host.as_str(), self.port))).await {
                Ok(Ok(stream)) => {
                    Self::tune(&stream);
                    return Ok(stream);
                }
                Ok(Err(source)) => {
                    debug!("[POOL] Dial {} failed: {}", address, source);
                    last_error = PoolError::Connect { address, source };
                }
                Err(_) => {
                    debug!("[POOL] Dial {} timed out", address);
                    last_error = PoolError::ConnectTimeout { address, timeout: self.connect_timeout };
                }
            }
        }
        Err(last_error)
    }

    fn tune(stream: &TcpStream) {
        if let Err(error) = stream.set_nodelay(true) {
            debug!("[POOL] Unable to set TCP_NODELAY: {}", error);
        }
        let keepalive = TcpKeepalive::new().with_time(KEEPALIVE_TIME);
        if let Err(error) = SockRef::from(stream).set_tcp_keepalive(&keepalive) {
            debug!("[POOL] Unable to enable keepalive: {}", error);
        }
    }
}

#[async_trait]
impl ManagedPool for ConnectionPool {
    fn has_usable_connection(&self) -> bool {
        !self.is_closed() && self.live_connections() > 0
    }

    async fn close(&self) -> Result<(), PoolError> {
        let streams: Vec<TcpStream> = {
            let mut idle = self.idle.lock();
            if self.closed.swap(true, Ordering::SeqCst) {
                return Err(PoolError::Closed(self.endpoint()));
            }
            idle.drain(..).collect()
        };
        self.permits.close();
        self.live.fetch_sub(streams.len(), Ordering::SeqCst);

        let quit = Header::new(0, FDFS_PROTO_CMD_QUIT, 0).to_bytes();
        let mut result = Ok(());
        for mut stream in streams {
            if let Err(source) = stream.write_all(&quit).await {
                warn!("[POOL] Sending QUIT to {} failed: {}", self.endpoint(), source);
                result = Err(PoolError::Close { address: self.endpoint(), source });
            }
        }
        debug!("[POOL] Closed {}", self.endpoint());
        result
    }
}

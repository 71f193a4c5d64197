use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use crate::pool::errors::PoolError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::tcp_pool_factory::TcpPoolFactory;
use crate::pool::traits::pool_factory::PoolFactory;

impl TcpPoolFactory {
    pub fn new(connect_timeout: Duration) -> TcpPoolFactory {
        TcpPoolFactory { connect_timeout }
    }
}

#[async_trait]
impl PoolFactory for TcpPoolFactory {
    type Pool = ConnectionPool;

    async fn create(
        &self,
        addresses: &[String],
        port: u16,
        min_conns: usize,
        max_conns: usize,
    ) -> Result<Arc<ConnectionPool>, PoolError> {
        ConnectionPool::connect(addresses, port, min_conns, max_conns, self.connect_timeout).await
    }
}

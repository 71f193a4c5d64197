use std::sync::Arc;
use async_trait::async_trait;
use crate::pool::errors::PoolError;
use crate::pool::traits::managed_pool::ManagedPool;

#[async_trait]
pub trait PoolFactory: Send + Sync + 'static {
    type Pool: ManagedPool;

    async fn create(
        &self,
        addresses: &[String],
        port: u16,
        min_conns: usize,
        max_conns: usize,
    ) -> Result<Arc<Self::Pool>, PoolError>;
}

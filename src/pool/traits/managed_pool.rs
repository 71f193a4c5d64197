use async_trait::async_trait;
use crate::pool::errors::PoolError;

#[async_trait]
pub trait ManagedPool: Send + Sync + 'static {
    /// Must be safe to call while other tasks check connections in and out.
    fn has_usable_connection(&self) -> bool;

    async fn close(&self) -> Result<(), PoolError>;
}

use std::sync::Arc;
use tokio::sync::oneshot;
use crate::pool::errors::PoolError;
use crate::registry::errors::RegistryError;
use crate::registry::structs::pool_key::PoolKey;

pub type AcquireReply<P> = oneshot::Sender<Result<Arc<P>, RegistryError>>;
pub type ShutdownReply = oneshot::Sender<Vec<(PoolKey, PoolError)>>;

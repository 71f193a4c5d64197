use crate::pool::traits::managed_pool::ManagedPool;
use crate::registry::structs::pool_request::PoolRequest;
use crate::registry::types::{AcquireReply, ShutdownReply};

pub enum RegistryRequest<P: ManagedPool> {
    Acquire {
        request: PoolRequest,
        reply: AcquireReply<P>,
    },
    Shutdown {
        reply: ShutdownReply,
    },
}

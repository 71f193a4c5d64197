use std::fmt;
use std::sync::Arc;
use crate::protocol::structs::tracker_client::TrackerClient;
use crate::registry::structs::pool_broker::PoolBroker;

#[derive(Clone)]
pub struct FdfsClient {
    pub(crate) broker: Arc<PoolBroker>,
    pub(crate) tracker: TrackerClient,
}

impl fmt::Debug for FdfsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FdfsClient")
            .field("tracker", &self.tracker.pool.endpoint())
            .field("network_timeout", &self.tracker.network_timeout)
            .finish()
    }
}

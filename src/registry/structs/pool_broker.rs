use std::time::Duration;
use crate::config::structs::pool_config::PoolConfig;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::registry::structs::pool_registry::PoolRegistry;

pub struct PoolBroker {
    pub trackers: PoolRegistry<ConnectionPool>,
    pub storages: PoolRegistry<ConnectionPool>,
    pub tracker_pool: PoolConfig,
    pub storage_pool: PoolConfig,
    pub network_timeout: Duration,
}

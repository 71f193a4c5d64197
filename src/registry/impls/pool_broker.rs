use std::sync::Arc;
use log::warn;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::pool_config::PoolConfig;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::tcp_pool_factory::TcpPoolFactory;
use crate::registry::errors::RegistryError;
use crate::registry::structs::pool_broker::PoolBroker;
use crate::registry::structs::pool_key::PoolKey;
use crate::registry::structs::pool_registry::PoolRegistry;
use crate::registry::structs::pool_request::PoolRequest;

impl PoolBroker {
    /// Starts the tracker and storage registries. Must be called within a tokio runtime.
    pub fn start(config: &Configuration) -> Arc<PoolBroker> {
        let factory = TcpPoolFactory::new(config.connect_timeout());
        Arc::new(PoolBroker {
            trackers: PoolRegistry::start("tracker", factory),
            storages: PoolRegistry::start("storage", factory),
            tracker_pool: config.tracker_pool,
            storage_pool: config.storage_pool,
            network_timeout: config.network_timeout(),
        })
    }

    pub async fn tracker_pool(&self, host: &str, port: u16) -> Result<Arc<ConnectionPool>, RegistryError> {
        self.trackers.acquire(Self::request(host, port, self.tracker_pool)).await
    }

    pub async fn storage_pool(&self, ip_addr: &str, port: u16) -> Result<Arc<ConnectionPool>, RegistryError> {
        self.storages.acquire(Self::request(ip_addr, port, self.storage_pool)).await
    }

    /// Shuts both registries down. Both are always attempted; the tracker error wins when
    /// both fail.
    pub async fn shutdown(&self) -> Result<(), RegistryError> {
        let trackers = self.trackers.shutdown().await;
        let storages = self.storages.shutdown().await;
        if let (Err(tracker_error), Err(storage_error)) = (&trackers, &storages) {
            warn!("[REGISTRY] Both registries failed to shut down: {} / {}", tracker_error, storage_error);
        }
        trackers.and(storages)
    }

    fn request(host: &str, port: u16, sizing: PoolConfig) -> PoolRequest {
        PoolRequest {
            key: PoolKey::new(host, port),
            addresses: vec![host.to_string()],
            port,
            min_conns: sizing.min_conns,
            max_conns: sizing.max_conns,
        }
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use ahash::AHashMap;
use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};
use crate::pool::errors::PoolError;
use crate::pool::traits::managed_pool::ManagedPool;
use crate::pool::traits::pool_factory::PoolFactory;
use crate::registry::enums::registry_request::RegistryRequest;
use crate::registry::errors::RegistryError;
use crate::registry::structs::pool_key::PoolKey;
use crate::registry::structs::pool_registry::PoolRegistry;
use crate::registry::structs::pool_request::PoolRequest;

impl<P: ManagedPool> PoolRegistry<P> {
    /// Spawns the registry task. Must be called within a tokio runtime.
    pub fn start<F>(name: &'static str, factory: F) -> PoolRegistry<P>
    where
        F: PoolFactory<Pool = P>,
    {
        let (sender, receiver) = mpsc::channel(1);
        let handle = tokio::spawn(Self::run(name, factory, receiver));
        info!("[REGISTRY] Started the {} pool registry", name);
        PoolRegistry {
            name,
            sender,
            closing: AtomicBool::new(false),
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        !self.closing.load(Ordering::SeqCst) && !self.sender.is_closed()
    }

    /// Returns the cached pool for `request.key`, creating it when missing or unusable.
    pub async fn acquire(&self, request: PoolRequest) -> Result<Arc<P>, RegistryError> {
        if self.closing.load(Ordering::SeqCst) {
            return Err(RegistryError::Closed(self.name));
        }
        let (reply, answer) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Acquire { request, reply })
            .await
            .map_err(|_| RegistryError::Closed(self.name))?;
        answer.await.map_err(|_| RegistryError::Closed(self.name))?
    }

    /// Closes every cached pool and stops the registry task.
    pub async fn shutdown(&self) -> Result<(), RegistryError> {
        if self.closing.swap(true, Ordering::SeqCst) {
            return Err(RegistryError::Closed(self.name));
        }
        let (reply, answer) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Shutdown { reply })
            .await
            .map_err(|_| RegistryError::Closed(self.name))?;
        let failures = answer.await.map_err(|_| RegistryError::Closed(self.name))?;

        let handle = self.handle.lock().take();
        if let Some(handle) = handle
            && let Err(error) = handle.await
        {
            warn!("[REGISTRY] The {} pool registry task ended abnormally: {}", self.name, error);
        }

        if failures.is_empty() {
            info!("[REGISTRY] Shut down the {} pool registry", self.name);
            Ok(())
        } else {
            Err(RegistryError::CloseFailed { registry: self.name, failures })
        }
    }

    async fn run<F>(name: &'static str, factory: F, mut receiver: mpsc::Receiver<RegistryRequest<P>>)
    where
        F: PoolFactory<Pool = P>,
    {
        let mut pools: AHashMap<PoolKey, Arc<P>> = AHashMap::new();
        while let Some(message) = receiver.recv().await {
            match message {
                RegistryRequest::Acquire { request, reply } => {
                    let result = Self::resolve(name, &factory, &mut pools, request).await;
                    if reply.send(result).is_err() {
                        debug!("[REGISTRY] {} acquire requester went away", name);
                    }
                }
                RegistryRequest::Shutdown { reply } => {
                    receiver.close();
                    let failures = Self::close_all(name, &mut pools).await;
                    let _ = reply.send(failures);
                    return;
                }
            }
        }
        debug!("[REGISTRY] The {} pool registry was dropped with {} pool(s) cached", name, pools.len());
    }

    async fn resolve<F>(name: &'static str, factory: &F, pools: &mut AHashMap<PoolKey, Arc<P>>, request: PoolRequest) -> Result<Arc<P>, RegistryError>
    where
        F: PoolFactory<Pool = P>,
    {
        if let Some(pool) = pools.get(&request.key)
            && pool.has_usable_connection()
        {
            return Ok(Arc::clone(pool));
        }

        match factory.create(&request.addresses, request.port, request.min_conns, request.max_conns).await {
            Ok(pool) => {
                if pools.insert(request.key.clone(), Arc::clone(&pool)).is_some() {
                    info!("[REGISTRY] Replaced the stale {} pool {}", name, request.key);
                } else {
                    info!("[REGISTRY] Created {} pool {}", name, request.key);
                }
                Ok(pool)
            }
            Err(error) => {
                warn!("[REGISTRY] Unable to create {} pool {}: {}", name, request.key, error);
                Err(RegistryError::Pool(error))
            }
        }
    }

    async fn close_all(name: &'static str, pools: &mut AHashMap<PoolKey, Arc<P>>) -> Vec<(PoolKey, PoolError)> {
        let mut failures = Vec::new();
        for (key, pool) in pools.drain() {
            if let Err(error) = pool.close().await {
                warn!("[REGISTRY] Closing {} pool {} failed: {}", name, key, error);
                failures.push((key, error));
            }
        }
        failures
    }
}

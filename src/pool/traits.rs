/// Probe and teardown interface of a cached pool.
pub mod managed_pool;

/// Creation interface used by the registries.
pub mod pool_factory;

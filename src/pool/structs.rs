/// Bounded TCP connection pool for one endpoint.
pub mod connection_pool;

/// Checked-out connection returned to its pool on drop.
pub mod pooled_connection;

/// Factory creating `ConnectionPool`s for the registries.
pub mod tcp_pool_factory;

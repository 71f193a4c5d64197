/// Dialing, checkout/checkin and closing of `ConnectionPool`.
pub mod connection_pool;

/// Deref and drop behaviour of `PooledConnection`.
pub mod pooled_connection;

/// `PoolFactory` implementation producing `ConnectionPool`s.
pub mod tcp_pool_factory;

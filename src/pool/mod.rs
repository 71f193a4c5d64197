//! Connection pool module.
//!
//! A [`ConnectionPool`](structs::connection_pool::ConnectionPool) owns a bounded set of TCP
//! connections to one endpoint (one or more addresses sharing a port).
//!
//! # Behaviour
//!
//! - Creation dials `max(min_conns, 1)` connections; any dial failure fails creation
//! - `get()` hands out an idle connection, or dials a new one while fewer than
//!   `max_conns` are checked out, otherwise waits
//! - Dropping a [`PooledConnection`](structs::pooled_connection::PooledConnection) checks it
//!   back in, unless it was marked broken
//! - `has_usable_connection()` is a lock-free read used by the registries
//! - `close()` sends `QUIT` on every idle connection and refuses further checkouts
//!
//! The registries only depend on the [`ManagedPool`](traits::managed_pool::ManagedPool) and
//! [`PoolFactory`](traits::pool_factory::PoolFactory) traits.

/// Error type for pool operations.
pub mod errors;

/// Implementation blocks for pools and pooled connections.
pub mod impls;

/// Pool, pooled connection and factory structures.
pub mod structs;

/// Traits the registries use to create, probe and close pools.
pub mod traits;

//! Pool registries.
//!
//! A [`PoolRegistry`](structs::pool_registry::PoolRegistry) hands out one shared pool per
//! [`PoolKey`](structs::pool_key::PoolKey). It runs as a single task that owns the cache and
//! reads requests from a one-slot mailbox, answering each on its own oneshot channel:
//!
//! - a cached pool with a usable connection is returned as is
//! - otherwise a pool is created through the factory and replaces any stale entry
//! - a creation failure goes back to its requester only, the cache is untouched
//!
//! Because one task evaluates every request in arrival order, two concurrent callers asking
//! for the same key always get the same pool. Requests for different keys queue behind each
//! other while a pool is being dialed, which bounds throughput on cold caches.
//!
//! `shutdown()` closes every cached pool and stops the task. Any later `acquire()` or
//! `shutdown()` fails with [`RegistryError::Closed`](errors::RegistryError).
//!
//! [`PoolBroker`](structs::pool_broker::PoolBroker) owns one registry for tracker pools and
//! one for storage pools.

pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod types;

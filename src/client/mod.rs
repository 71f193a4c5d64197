//! Client facade.
//!
//! [`FdfsClient`](structs::fdfs_client::FdfsClient) binds one tracker pool, chosen at
//! construction, to a shared [`PoolBroker`](crate::registry::structs::pool_broker::PoolBroker).
//! Every operation follows the same route:
//!
//! 1. validate local input (file presence, remote file identifier)
//! 2. ask the tracker for a storage endpoint
//! 3. acquire the storage pool for that endpoint from the broker
//! 4. run the storage exchange
//!
//! Step 1 never touches the network, so a bad path or identifier fails without any
//! tracker traffic.

pub mod errors;
pub mod impls;
pub mod structs;

//! # fdfs-client
//!
//! A pooled, tracker-routed client for FastDFS-style distributed file storage clusters.
//!
//! ## Overview
//!
//! A cluster is made of a *tracker* tier, which knows where files live, and a *storage* tier,
//! which holds the file content in named groups. Every file operation goes through the same
//! route:
//!
//! 1. Ask a tracker which storage node should serve the request.
//! 2. Obtain a pooled connection to that storage node from the storage [`registry`].
//! 3. Run the upload/download/delete exchange over the checked-out connection.
//!
//! Connection pools are cached per endpoint by two independent registries (one for trackers,
//! one for storage nodes). Each registry is a single task that owns its cache and serves
//! requests one at a time from a mailbox, so pool creation never races.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fdfs_client::client::structs::fdfs_client::FdfsClient;
//! use fdfs_client::config::structs::configuration::Configuration;
//! use fdfs_client::registry::structs::pool_broker::PoolBroker;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let broker = PoolBroker::start(&config);
//! let client = FdfsClient::new(broker.clone(), &config).await?;
//!
//! let uploaded = client.upload_by_buffer(b"hello", "txt").await?;
//! client.delete_file(&uploaded.remote_file_id).await?;
//!
//! broker.shutdown().await?;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - The client facade routing file operations
//! - [`config`] - Configuration loading and tracker list shaping
//! - [`logging`] - Console logging setup
//! - [`pool`] - TCP connection pools per endpoint
//! - [`protocol`] - Wire codec plus tracker and storage protocol clients
//! - [`registry`] - Single-writer pool registries and the broker owning them
//! - [`remote_file_id`] - The `group/path` remote file identifier codec
//! - [`structs`] - CLI argument parsing

/// Client facade.
///
/// Turns a logical file operation into a tracker query, a storage pool acquisition and a
/// storage exchange.
pub mod client;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration, reading legacy
/// `client.conf` files, and shaping the tracker server list.
pub mod config;

/// Console logging setup based on `fern`.
pub mod logging;

/// Connection pool module.
///
/// Bounded sets of TCP connections to a single endpoint with checkout/checkin semantics.
pub mod pool;

/// Cluster wire protocol.
///
/// Header framing, command constants, and the tracker and storage protocol clients.
pub mod protocol;

/// Pool registries.
///
/// One mailbox-driven task per pool kind owning the key to pool cache, and the broker that
/// groups the tracker and storage registries.
pub mod registry;

/// Remote file identifier codec (`group/path`).
pub mod remote_file_id;

/// CLI argument parsing.
pub mod structs;

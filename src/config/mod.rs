//! Configuration management module.
//!
//! This module handles loading, saving and validating the client configuration. Two
//! input formats are understood:
//!
//! - **config.toml**: the native format, generated with `--create-config`
//! - **client.conf**: the legacy `key = value` file shipped with FastDFS clusters
//!
//! # Configuration Structure
//!
//! - **log_level**: console log level
//! - **tracker_server**: comma separated `host[:port]` list
//! - **tracker_selection**: which tracker pool a new client keeps
//! - **connect_timeout** / **network_timeout**: seconds
//! - **tracker_pool** / **storage_pool**: pool sizing
//!
//! # Tracker list shaping
//!
//! The tracker list is reduced to an ordered host list and one shared port. Entries
//! without a port use the default (`22122`) unless an entry names one; the last port
//! named while scanning left to right becomes the port of every tracker. Clusters run all
//! trackers on the same port, and a per-entry port is treated as the cluster-wide port.
//!
//! # Example
//!
//! ```rust,ignore
//! use fdfs_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let trackers = config.tracker_config()?;
//! ```

/// Configuration enumerations (errors, tracker selection policy).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving and shaping.
pub mod impls;

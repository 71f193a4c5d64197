//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Connection pool sizing for tracker or storage pools.
pub mod pool_config;

/// Shaped tracker list: ordered hosts plus the shared port.
pub mod tracker_config;

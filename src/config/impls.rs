/// Loading, saving, legacy parsing and validation of `Configuration`.
pub mod configuration;

/// Defaults and checks for `PoolConfig`.
pub mod pool_config;

/// Tracker list parsing.
pub mod tracker_config;

/// Display and helpers for `TrackerSelection`.
pub mod tracker_selection;

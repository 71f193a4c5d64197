/// Configuration loading and validation errors.
pub mod configuration_error;

/// Policy deciding which tracker pool a client keeps.
pub mod tracker_selection;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which tracker pool a client keeps when several tracker hosts are configured.
///
/// `first_reachable` stops at the first host that yields a pool. `last_attempt` tries every
/// host and keeps the pool of the last one that succeeded, which is how older clients
/// behaved.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum TrackerSelection {
    #[default]
    first_reachable,
    last_attempt,
}

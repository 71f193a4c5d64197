use serde::{Deserialize, Serialize};
use crate::config::enums::tracker_selection::TrackerSelection;
use crate::config::structs::pool_config::PoolConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub tracker_server: String,
    #[serde(default)]
    pub tracker_selection: TrackerSelection,
    pub connect_timeout: u64,
    pub network_timeout: u64,
    pub tracker_pool: PoolConfig,
    pub storage_pool: PoolConfig,
}

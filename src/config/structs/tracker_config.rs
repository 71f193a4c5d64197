use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub hosts: Vec<String>,
    pub port: u16,
}

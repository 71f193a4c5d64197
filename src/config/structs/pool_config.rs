use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub min_conns: usize,
    pub max_conns: usize,
}

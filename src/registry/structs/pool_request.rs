use crate::registry::structs::pool_key::PoolKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRequest {
    pub key: PoolKey,
    pub addresses: Vec<String>,
    pub port: u16,
    pub min_conns: usize,
    pub max_conns: usize,
}

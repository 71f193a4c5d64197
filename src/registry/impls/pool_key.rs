use std::fmt;
use crate::registry::structs::pool_key::PoolKey;

impl PoolKey {
    pub fn new(host: &str, port: u16) -> PoolKey {
        PoolKey(format!("{}-{}", host, port))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

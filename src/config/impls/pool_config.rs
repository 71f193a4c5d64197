use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::pool_config::PoolConfig;

pub const DEFAULT_MIN_CONNS: usize = 10;
pub const DEFAULT_MAX_CONNS: usize = 150;

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_conns: DEFAULT_MIN_CONNS,
            max_conns: DEFAULT_MAX_CONNS,
        }
    }
}

impl PoolConfig {
    pub fn new(min_conns: usize, max_conns: usize) -> PoolConfig {
        PoolConfig { min_conns, max_conns }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigurationError> {
        if self.max_conns == 0 || self.min_conns > self.max_conns {
            return Err(ConfigurationError::InvalidPoolSize {
                name,
                min_conns: self.min_conns,
                max_conns: self.max_conns,
            });
        }
        Ok(())
    }
}

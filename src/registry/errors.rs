use thiserror::Error;
use crate::pool::errors::PoolError;
use crate::registry::structs::pool_key::PoolKey;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("{0} pool registry is closed")]
    Closed(&'static str),

    #[error("{registry} pool registry failed to close {} pool(s)", .failures.len())]
    CloseFailed {
        registry: &'static str,
        failures: Vec<(PoolKey, PoolError)>,
    },
}

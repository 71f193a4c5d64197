pub mod pool_broker;
pub mod pool_key;
pub mod pool_registry;
pub mod pool_request;

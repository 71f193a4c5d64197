use std::sync::atomic::AtomicBool;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::pool::traits::managed_pool::ManagedPool;
use crate::registry::enums::registry_request::RegistryRequest;

pub struct PoolRegistry<P: ManagedPool> {
    pub(crate) name: &'static str,
    pub(crate) sender: mpsc::Sender<RegistryRequest<P>>,
    pub(crate) closing: AtomicBool,
    pub(crate) handle: Mutex<Option<JoinHandle<()>>>,
}

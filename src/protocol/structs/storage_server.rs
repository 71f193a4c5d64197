/// Storage endpoint chosen by a tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageServer {
    pub group_name: String,
    pub ip_addr: String,
    pub port: u16,
    pub store_path_index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteFileId {
    pub group: String,
    pub path: String,
}

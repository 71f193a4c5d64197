use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use log::{debug, info, warn};
use crate::client::errors::ClientError;
use crate::client::structs::fdfs_client::FdfsClient;
use crate::config::enums::tracker_selection::TrackerSelection;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::protocol::enums::download_target::DownloadTarget;
use crate::protocol::enums::upload_source::UploadSource;
use crate::protocol::impls::upload_source::file_ext_name;
use crate::protocol::protocol::{STORAGE_PROTO_CMD_UPLOAD_APPENDER_FILE, STORAGE_PROTO_CMD_UPLOAD_FILE};
use crate::protocol::structs::download_file_response::DownloadFileResponse;
use crate::protocol::structs::storage_client::StorageClient;
use crate::protocol::structs::storage_server::StorageServer;
use crate::protocol::structs::tracker_client::TrackerClient;
use crate::protocol::structs::upload_file_response::UploadFileResponse;
use crate::registry::structs::pool_broker::PoolBroker;
use crate::remote_file_id::structs::remote_file_id::RemoteFileId;

impl FdfsClient {
    /// Builds a client from the configured tracker list and selection policy.
    pub async fn new(broker: Arc<PoolBroker>, config: &Configuration) -> Result<FdfsClient, ClientError> {
        let tracker = config.tracker_config()?;
        Self::with_tracker(broker, &tracker, config.tracker_selection).await
    }

    /// Acquires a tracker pool for each host in order.
    ///
    /// `first_reachable` keeps the first pool obtained, `last_attempt` tries every host and
    /// keeps the last pool obtained. Fails only when no host yields a pool.
    pub async fn with_tracker(broker: Arc<PoolBroker>, tracker: &TrackerConfig, selection: TrackerSelection) -> Result<FdfsClient, ClientError> {
        let mut selected = None;
        let mut last_error = None;

        for (host, port) in tracker.endpoints() {
            match broker.tracker_pool(host, port).await {
                Ok(pool) => {
                    debug!("[CLIENT] Tracker {}:{} is reachable", host, port);
                    selected = Some(pool);
                    if selection.stops_at_first_success() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("[CLIENT] Tracker {}:{} is unavailable: {}", host, port, error);
                    last_error = Some(error);
                }
            }
        }

        match (selected, last_error) {
            (Some(pool), _) => {
                info!("[CLIENT] Using tracker {} ({})", pool.endpoint(), selection);
                let tracker = TrackerClient::new(pool, broker.network_timeout);
                Ok(FdfsClient { broker, tracker })
            }
            (None, Some(error)) => Err(ClientError::NoTracker(error)),
            (None, None) => Err(ClientError::NoTrackerConfigured),
        }
    }

    /// `host:port` of the tracker this client talks to.
    pub fn tracker_endpoint(&self) -> String {
        self.tracker.pool.endpoint()
    }

    pub async fn check_tracker(&self) -> Result<(), ClientError> {
        Ok(self.tracker.active_test().await?)
    }

    pub async fn upload_by_filename(&self, local_filename: impl AsRef<Path>) -> Result<UploadFileResponse, ClientError> {
        let path = local_filename.as_ref();
        Self::check_local_file(path).await?;
        let server = self.tracker.query_storage_store().await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.upload(&server, STORAGE_PROTO_CMD_UPLOAD_FILE, UploadSource::File(path), &file_ext_name(path)).await?)
    }

    pub async fn upload_by_buffer(&self, buffer: &[u8], file_ext_name: &str) -> Result<UploadFileResponse, ClientError> {
        let server = self.tracker.query_storage_store().await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.upload(&server, STORAGE_PROTO_CMD_UPLOAD_FILE, UploadSource::Buffer(buffer), file_ext_name).await?)
    }

    /// Stores `local_filename` as a slave of `master_file_id`, in the master's group.
    pub async fn upload_slave_by_filename(&self, local_filename: impl AsRef<Path>, master_file_id: &str, prefix_name: &str) -> Result<UploadFileResponse, ClientError> {
        let path = local_filename.as_ref();
        Self::check_local_file(path).await?;
        let master = RemoteFileId::decode(master_file_id)?;
        let server = self.tracker.query_storage_store_with_group(&master.group).await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.upload_slave(UploadSource::File(path), &master.path, prefix_name, &file_ext_name(path)).await?)
    }

    pub async fn upload_slave_by_buffer(&self, buffer: &[u8], master_file_id: &str, prefix_name: &str, file_ext_name: &str) -> Result<UploadFileResponse, ClientError> {
        let master = RemoteFileId::decode(master_file_id)?;
        let server = self.tracker.query_storage_store_with_group(&master.group).await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.upload_slave(UploadSource::Buffer(buffer), &master.path, prefix_name, file_ext_name).await?)
    }

    pub async fn upload_appender_by_filename(&self, local_filename: impl AsRef<Path>) -> Result<UploadFileResponse, ClientError> {
        let path = local_filename.as_ref();
        Self::check_local_file(path).await?;
        let server = self.tracker.query_storage_store().await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.upload(&server, STORAGE_PROTO_CMD_UPLOAD_APPENDER_FILE, UploadSource::File(path), &file_ext_name(path)).await?)
    }

    pub async fn upload_appender_by_buffer(&self, buffer: &[u8], file_ext_name: &str) -> Result<UploadFileResponse, ClientError> {
        let server = self.tracker.query_storage_store().await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.upload(&server, STORAGE_PROTO_CMD_UPLOAD_APPENDER_FILE, UploadSource::Buffer(buffer), file_ext_name).await?)
    }

    pub async fn delete_file(&self, remote_file_id: &str) -> Result<(), ClientError> {
        let remote = RemoteFileId::decode(remote_file_id)?;
        let server = self.tracker.query_storage_update(&remote.group, &remote.path).await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.delete(&remote.group, &remote.path).await?)
    }

    /// Writes `download_size` bytes from `offset` into `local_filename`; 0 reads to the end.
    pub async fn download_to_file(&self, local_filename: impl AsRef<Path>, remote_file_id: &str, offset: u64, download_size: u64) -> Result<DownloadFileResponse, ClientError> {
        let remote = RemoteFileId::decode(remote_file_id)?;
        let server = self.tracker.query_storage_fetch(&remote.group, &remote.path).await?;
        let storage = self.storage_client(&server).await?;
        let target = DownloadTarget::File(local_filename.as_ref().to_path_buf());
        Ok(storage.download(&remote.group, &remote.path, offset, download_size, target).await?)
    }

    pub async fn download_to_buffer(&self, remote_file_id: &str, offset: u64, download_size: u64) -> Result<DownloadFileResponse, ClientError> {
        let remote = RemoteFileId::decode(remote_file_id)?;
        let server = self.tracker.query_storage_fetch(&remote.group, &remote.path).await?;
        let storage = self.storage_client(&server).await?;
        Ok(storage.download(&remote.group, &remote.path, offset, download_size, DownloadTarget::Buffer).await?)
    }

    async fn storage_client(&self, server: &StorageServer) -> Result<StorageClient, ClientError> {
        let pool = self.broker.storage_pool(&server.ip_addr, server.port).await?;
        Ok(StorageClient::new(pool, self.broker.network_timeout))
    }

    async fn check_local_file(path: &Path) -> Result<(), ClientError> {
        let metadata = tokio::fs::metadata(path).await.map_err(|source| ClientError::LocalFile {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ClientError::LocalFile {
                path: path.to_path_buf(),
                source: std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
            });
        }
        Ok(())
    }
}

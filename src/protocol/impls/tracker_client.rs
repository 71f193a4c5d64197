use std::sync::Arc;
use std::time::Duration;
use log::debug;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{pack_fixed, recv_package, send_request, settle, with_timeout, FDFS_GROUP_NAME_MAX_LEN, FDFS_PROTO_CMD_ACTIVE_TEST, TRACKER_PROTO_CMD_SERVICE_QUERY_FETCH_ONE, TRACKER_PROTO_CMD_SERVICE_QUERY_STORE_WITHOUT_GROUP_ONE, TRACKER_PROTO_CMD_SERVICE_QUERY_STORE_WITH_GROUP_ONE, TRACKER_PROTO_CMD_SERVICE_QUERY_UPDATE, TRACKER_QUERY_STORAGE_STORE_BODY_LEN};
use crate::protocol::structs::storage_server::StorageServer;
use crate::protocol::structs::tracker_client::TrackerClient;

impl TrackerClient {
    pub fn new(pool: Arc<ConnectionPool>, network_timeout: Duration) -> TrackerClient {
        TrackerClient { pool, network_timeout }
    }

    /// Storage node to upload to, any group.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn query_storage_store(&self) -> Result<StorageServer, ProtocolError> {
        let body = self.query(
            TRACKER_PROTO_CMD_SERVICE_QUERY_STORE_WITHOUT_GROUP_ONE,
            Vec::new(),
            "query storage store",
            Some(TRACKER_QUERY_STORAGE_STORE_BODY_LEN),
        ).await?;
        let server = StorageServer::from_store_body(&body)?;
        debug!("[TRACKER] Store on {}:{} ({})", server.ip_addr, server.port, server.group_name);
        Ok(server)
    }

    /// Storage node to upload to within `group_name`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn query_storage_store_with_group(&self, group_name: &str) -> Result<StorageServer, ProtocolError> {
        let body = self.query(
            TRACKER_PROTO_CMD_SERVICE_QUERY_STORE_WITH_GROUP_ONE,
            pack_fixed(group_name, FDFS_GROUP_NAME_MAX_LEN),
            "query storage store",
            Some(TRACKER_QUERY_STORAGE_STORE_BODY_LEN),
        ).await?;
        let server = StorageServer::from_store_body(&body)?;
        debug!("[TRACKER] Store in {} on {}:{}", group_name, server.ip_addr, server.port);
        Ok(server)
    }

    /// Storage node holding `group_name/remote_filename` for reads.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn query_storage_fetch(&self, group_name: &str, remote_filename: &str) -> Result<StorageServer, ProtocolError> {
        self.query_file_endpoint(TRACKER_PROTO_CMD_SERVICE_QUERY_FETCH_ONE, group_name, remote_filename, "query storage fetch").await
    }

    /// Storage node holding `group_name/remote_filename` for changes.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn query_storage_update(&self, group_name: &str, remote_filename: &str) -> Result<StorageServer, ProtocolError> {
        self.query_file_endpoint(TRACKER_PROTO_CMD_SERVICE_QUERY_UPDATE, group_name, remote_filename, "query storage update").await
    }

    pub async fn active_test(&self) -> Result<(), ProtocolError> {
        self.query(FDFS_PROTO_CMD_ACTIVE_TEST, Vec::new(), "active test", Some(0)).await?;
        Ok(())
    }

    async fn query_file_endpoint(&self, cmd: u8, group_name: &str, remote_filename: &str, context: &'static str) -> Result<StorageServer, ProtocolError> {
        let mut request = pack_fixed(group_name, FDFS_GROUP_NAME_MAX_LEN);
        request.extend_from_slice(remote_filename.as_bytes());
        let body = self.query(cmd, request, context, None).await?;
        StorageServer::from_fetch_body(&body, context)
    }

    async fn query(&self, cmd: u8, request: Vec<u8>, context: &'static str, expected_len: Option<usize>) -> Result<Vec<u8>, ProtocolError> {
        let mut connection = self.pool.get().await?;
        let result = with_timeout(self.network_timeout, context, async {
            let stream = &mut *connection;
            send_request(stream, cmd, &request).await?;
            recv_package(stream, context, expected_len).await
        }).await;
        settle(&mut connection, result)
    }
}

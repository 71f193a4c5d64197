use std::sync::Arc;
use std::time::Duration;
use byteorder::{BigEndian, WriteBytesExt};
use log::debug;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::protocol::enums::download_content::DownloadContent;
use crate::protocol::enums::download_target::DownloadTarget;
use crate::protocol::enums::upload_source::UploadSource;
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{copy_exact, pack_fixed, recv_body, recv_header, recv_package, send_request, settle, unpack_fixed, with_timeout, FDFS_FILE_EXT_NAME_MAX_LEN, FDFS_FILE_PREFIX_MAX_LEN, FDFS_GROUP_NAME_MAX_LEN, STORAGE_PROTO_CMD_DELETE_FILE, STORAGE_PROTO_CMD_DOWNLOAD_FILE, STORAGE_PROTO_CMD_UPLOAD_SLAVE_FILE};
use crate::protocol::structs::download_file_response::DownloadFileResponse;
use crate::protocol::structs::header::Header;
use crate::protocol::structs::storage_client::StorageClient;
use crate::protocol::structs::storage_server::StorageServer;
use crate::protocol::structs::upload_file_response::UploadFileResponse;
use crate::remote_file_id::structs::remote_file_id::RemoteFileId;

impl StorageClient {
    pub fn new(pool: Arc<ConnectionPool>, network_timeout: Duration) -> StorageClient {
        StorageClient { pool, network_timeout }
    }

    /// Plain or appender upload, depending on `cmd`.
    #[tracing::instrument(level = "debug", skip(self, source))]
    pub async fn upload(&self, server: &StorageServer, cmd: u8, source: UploadSource<'_>, file_ext_name: &str) -> Result<UploadFileResponse, ProtocolError> {
        let file_size = source.size().await?;
        let mut prefix = Vec::with_capacity(1 + 8 + FDFS_FILE_EXT_NAME_MAX_LEN);
        prefix.push(server.store_path_index);
        WriteBytesExt::write_i64::<BigEndian>(&mut prefix, file_size as i64)?;
        prefix.extend_from_slice(&pack_fixed(file_ext_name, FDFS_FILE_EXT_NAME_MAX_LEN));
        self.upload_exchange(cmd, &prefix, source, file_size, "upload file").await
    }

    #[tracing::instrument(level = "debug", skip(self, source))]
    pub async fn upload_slave(&self, source: UploadSource<'_>, master_filename: &str, prefix_name: &str, file_ext_name: &str) -> Result<UploadFileResponse, ProtocolError> {
        let file_size = source.size().await?;
        let mut prefix = Vec::with_capacity(16 + FDFS_FILE_PREFIX_MAX_LEN + FDFS_FILE_EXT_NAME_MAX_LEN + master_filename.len());
        WriteBytesExt::write_i64::<BigEndian>(&mut prefix, master_filename.len() as i64)?;
        WriteBytesExt::write_i64::<BigEndian>(&mut prefix, file_size as i64)?;
        prefix.extend_from_slice(&pack_fixed(prefix_name, FDFS_FILE_PREFIX_MAX_LEN));
        prefix.extend_from_slice(&pack_fixed(file_ext_name, FDFS_FILE_EXT_NAME_MAX_LEN));
        prefix.extend_from_slice(master_filename.as_bytes());
        self.upload_exchange(STORAGE_PROTO_CMD_UPLOAD_SLAVE_FILE, &prefix, source, file_size, "upload slave file").await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete(&self, group_name: &str, remote_filename: &str) -> Result<(), ProtocolError> {
        let mut request = pack_fixed(group_name, FDFS_GROUP_NAME_MAX_LEN);
        request.extend_from_slice(remote_filename.as_bytes());
        let mut connection = self.pool.get().await?;
        let result = with_timeout(self.network_timeout, "delete file", async {
            let stream = &mut *connection;
            send_request(stream, STORAGE_PROTO_CMD_DELETE_FILE, &request).await?;
            recv_package(stream, "delete file", None).await
        }).await;
        settle(&mut connection, result)?;
        debug!("[STORAGE] Deleted {}/{}", group_name, remote_filename);
        Ok(())
    }

    /// `download_size` 0 reads to the end of the file. A local target file is only created
    /// once the storage node accepted the request.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn download(&self, group_name: &str, remote_filename: &str, offset: u64, download_size: u64, target: DownloadTarget) -> Result<DownloadFileResponse, ProtocolError> {
        let mut request = Vec::with_capacity(16 + FDFS_GROUP_NAME_MAX_LEN + remote_filename.len());
        WriteBytesExt::write_i64::<BigEndian>(&mut request, offset as i64)?;
        WriteBytesExt::write_i64::<BigEndian>(&mut request, download_size as i64)?;
        request.extend_from_slice(&pack_fixed(group_name, FDFS_GROUP_NAME_MAX_LEN));
        request.extend_from_slice(remote_filename.as_bytes());

        let mut connection = self.pool.get().await?;
        let result = Self::download_exchange(&mut *connection, &request, download_size, target, self.network_timeout).await;
        let (download_size, content) = settle(&mut connection, result)?;
        debug!("[STORAGE] Downloaded {} bytes of {}/{}", download_size, group_name, remote_filename);
        Ok(DownloadFileResponse {
            remote_file_id: RemoteFileId::encode(group_name, remote_filename),
            download_size,
            content,
        })
    }

    async fn upload_exchange(&self, cmd: u8, prefix: &[u8], source: UploadSource<'_>, file_size: u64, context: &'static str) -> Result<UploadFileResponse, ProtocolError> {
        let mut local = match source {
            UploadSource::File(path) => Some(tokio::fs::File::open(path).await?),
            UploadSource::Buffer(_) => None,
        };
        let mut connection = self.pool.get().await?;
        let result = async {
            let stream = &mut *connection;
            let header = Header::new(prefix.len() as i64 + file_size as i64, cmd, 0);
            with_timeout(self.network_timeout, context, async {
                stream.write_all(&header.to_bytes()).await?;
                stream.write_all(prefix).await?;
                if let UploadSource::Buffer(buffer) = source {
                    stream.write_all(buffer).await?;
                }
                Ok::<(), ProtocolError>(())
            }).await?;
            if let Some(file) = local.as_mut() {
                copy_exact(file, stream, file_size, self.network_timeout, context).await?;
            }
            let body = with_timeout(self.network_timeout, context, recv_package(stream, context, None)).await?;
            Self::parse_upload_body(&body, context)
        }.await;
        let response = settle(&mut connection, result)?;
        debug!("[STORAGE] Uploaded {} bytes as {}", file_size, response.remote_file_id);
        Ok(response)
    }

    /// A reply longer than a nonzero `download_size` is rejected before any body byte is read.
    /// A local file left short by a failed transfer is removed again.
    pub(crate) async fn download_exchange<S>(stream: &mut S, request: &[u8], download_size: u64, target: DownloadTarget, limit: Duration) -> Result<(u64, DownloadContent), ProtocolError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let context = "download file";
        let header = with_timeout(limit, context, async {
            send_request(stream, STORAGE_PROTO_CMD_DOWNLOAD_FILE, request).await?;
            recv_header(stream, context).await
        }).await?;
        let len = header.pkg_len as u64;
        if download_size != 0 && len > download_size {
            return Err(ProtocolError::InvalidBody {
                context,
                reason: format!("requested at most {} bytes, announced {}", download_size, len),
            });
        }
        match target {
            DownloadTarget::Buffer => {
                let content = with_timeout(limit, context, recv_body(stream, len as usize)).await?;
                Ok((len, DownloadContent::Buffer(content)))
            }
            DownloadTarget::File(path) => {
                let mut file = tokio::fs::File::create(&path).await?;
                let written = async {
                    copy_exact(stream, &mut file, len, limit, context).await?;
                    file.sync_all().await?;
                    Ok::<(), ProtocolError>(())
                }.await;
                if let Err(error) = written {
                    drop(file);
                    if let Err(remove_error) = tokio::fs::remove_file(&path).await {
                        debug!("[STORAGE] Could not remove partial download {}: {}", path.display(), remove_error);
                    }
                    return Err(error);
                }
                Ok((len, DownloadContent::File(path)))
            }
        }
    }

    fn parse_upload_body(body: &[u8], context: &'static str) -> Result<UploadFileResponse, ProtocolError> {
        if body.len() <= FDFS_GROUP_NAME_MAX_LEN {
            return Err(ProtocolError::InvalidBody {
                context,
                reason: format!("expected more than {} bytes, received {}", FDFS_GROUP_NAME_MAX_LEN, body.len()),
            });
        }
        let group_name = unpack_fixed(&body[..FDFS_GROUP_NAME_MAX_LEN]);
        let remote_filename = String::from_utf8_lossy(&body[FDFS_GROUP_NAME_MAX_LEN..]).into_owned();
        Ok(UploadFileResponse {
            remote_file_id: RemoteFileId::encode(&group_name, &remote_filename),
            group_name,
        })
    }
}

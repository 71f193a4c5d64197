use std::borrow::Borrow;
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::protocol::errors::ProtocolError;
use crate::protocol::structs::header::Header;

pub const FDFS_PROTO_HEADER_LEN: usize = 10;
pub const FDFS_PROTO_PKG_LEN_SIZE: usize = 8;
pub const FDFS_GROUP_NAME_MAX_LEN: usize = 16;
pub const IP_ADDRESS_SIZE: usize = 16;
pub const FDFS_FILE_EXT_NAME_MAX_LEN: usize = 6;
pub const FDFS_FILE_PREFIX_MAX_LEN: usize = 16;

pub const FDFS_PROTO_CMD_RESP: u8 = 100;
pub const FDFS_PROTO_CMD_QUIT: u8 = 82;
pub const FDFS_PROTO_CMD_ACTIVE_TEST: u8 = 111;

pub const TRACKER_PROTO_CMD_SERVICE_QUERY_STORE_WITHOUT_GROUP_ONE: u8 = 101;
pub const TRACKER_PROTO_CMD_SERVICE_QUERY_FETCH_ONE: u8 = 102;
pub const TRACKER_PROTO_CMD_SERVICE_QUERY_UPDATE: u8 = 103;
pub const TRACKER_PROTO_CMD_SERVICE_QUERY_STORE_WITH_GROUP_ONE: u8 = 104;

pub const STORAGE_PROTO_CMD_UPLOAD_FILE: u8 = 11;
pub const STORAGE_PROTO_CMD_DELETE_FILE: u8 = 12;
pub const STORAGE_PROTO_CMD_DOWNLOAD_FILE: u8 = 14;
pub const STORAGE_PROTO_CMD_UPLOAD_SLAVE_FILE: u8 = 21;
pub const STORAGE_PROTO_CMD_UPLOAD_APPENDER_FILE: u8 = 23;

/// group(16) + ip(15) + port(8)
pub const TRACKER_QUERY_STORAGE_FETCH_BODY_LEN: usize = FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE - 1 + FDFS_PROTO_PKG_LEN_SIZE;
/// fetch body + store_path_index(1)
pub const TRACKER_QUERY_STORAGE_STORE_BODY_LEN: usize = TRACKER_QUERY_STORAGE_FETCH_BODY_LEN + 1;

pub const ERRNO_ENOENT: u8 = 2;
pub const ERRNO_EEXIST: u8 = 17;
pub const ERRNO_EINVAL: u8 = 22;

/// NUL padded (or truncated) fixed width field.
pub fn pack_fixed(value: &str, len: usize) -> Vec<u8> {
    let mut field = vec![0u8; len];
    let bytes = value.as_bytes();
    let copy = bytes.len().min(len);
    field[..copy].copy_from_slice(&bytes[..copy]);
    field
}

/// Reads a fixed width field up to its first NUL.
pub fn unpack_fixed(field: &[u8]) -> String {
    let end = field.iter().position(|b| *b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

pub fn status_detail<S: Borrow<u8>>(status: S) -> &'static str {
    match *status.borrow() {
        ERRNO_EEXIST => " File Exist",
        ERRNO_EINVAL => " Argument Invalid",
        _ => "",
    }
}

pub async fn send_request<S>(stream: &mut S, cmd: u8, body: &[u8]) -> Result<(), ProtocolError>
where
    S: AsyncWrite + Unpin,
{
    let mut packet = Vec::with_capacity(FDFS_PROTO_HEADER_LEN + body.len());
    packet.extend_from_slice(&Header::new(body.len() as i64, cmd, 0).to_bytes());
    packet.extend_from_slice(body);
    stream.write_all(&packet).await?;
    stream.flush().await?;
    Ok(())
}

/// Reads a response header. A non-zero status drains the body and becomes
/// [`ProtocolError::Status`].
pub async fn recv_header<S>(stream: &mut S, context: &'static str) -> Result<Header, ProtocolError>
where
    S: AsyncRead + Unpin,
{
    let mut buffer = [0u8; FDFS_PROTO_HEADER_LEN];
    stream.read_exact(&mut buffer).await?;
    let header = Header::from_bytes(&buffer)?;
    if header.cmd != FDFS_PROTO_CMD_RESP {
        return Err(ProtocolError::UnexpectedCommand { expected: FDFS_PROTO_CMD_RESP, received: header.cmd });
    }
    if header.pkg_len < 0 {
        return Err(ProtocolError::InvalidBody { context, reason: format!("negative package length {}", header.pkg_len) });
    }
    if header.status != 0 {
        if header.pkg_len > 0 {
            let drained = tokio::io::copy(&mut (&mut *stream).take(header.pkg_len as u64), &mut tokio::io::sink()).await?;
            if drained != header.pkg_len as u64 {
                return Err(short_read(header.pkg_len as u64, drained));
            }
        }
        return Err(ProtocolError::Status { status: header.status, context });
    }
    Ok(header)
}

pub async fn recv_body<S>(stream: &mut S, len: usize) -> Result<Vec<u8>, ProtocolError>
where
    S: AsyncRead + Unpin,
{
    // The buffer grows with what actually arrives; `len` comes off the wire.
    let mut body = Vec::new();
    let received = (&mut *stream).take(len as u64).read_to_end(&mut body).await?;
    if received != len {
        return Err(short_read(len as u64, received as u64));
    }
    Ok(body)
}

fn short_read(expected: u64, received: u64) -> ProtocolError {
    ProtocolError::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        format!("connection closed after {} of {} bytes", received, expected),
    ))
}

/// Header plus body in one call, checking the body length when `expected_len` is given.
pub async fn recv_package<S>(stream: &mut S, context: &'static str, expected_len: Option<usize>) -> Result<Vec<u8>, ProtocolError>
where
    S: AsyncRead + Unpin,
{
    let header = recv_header(stream, context).await?;
    let len = header.pkg_len as usize;
    if let Some(expected) = expected_len && len != expected {
        return Err(ProtocolError::InvalidBody { context, reason: format!("expected {} bytes, received {}", expected, len) });
    }
    recv_body(stream, len).await
}

pub async fn with_timeout<T, F>(limit: Duration, context: &'static str, future: F) -> Result<T, ProtocolError>
where
    F: Future<Output = Result<T, ProtocolError>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout { context, timeout: limit }),
    }
}

/// Marks the connection broken when the error left the stream in an unknown state.
pub fn settle<T>(connection: &mut PooledConnection, result: Result<T, ProtocolError>) -> Result<T, ProtocolError> {
    if let Err(error) = &result
        && error.is_connection_fatal()
    {
        connection.mark_broken();
    }
    result
}

const COPY_CHUNK_SIZE: usize = 64 * 1024;

/// Copies exactly `len` bytes, bounding every read and write by `limit`.
pub async fn copy_exact<R, W>(reader: &mut R, writer: &mut W, len: u64, limit: Duration, context: &'static str) -> Result<u64, ProtocolError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0u8; COPY_CHUNK_SIZE.min(len as usize).max(1)];
    let mut remaining = len;
    while remaining > 0 {
        let want = buffer.len().min(remaining as usize);
        let read = with_timeout(limit, context, async { Ok::<usize, ProtocolError>(reader.read(&mut buffer[..want]).await?) }).await?;
        if read == 0 {
            return Err(ProtocolError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("{} ended after {} of {} bytes", context, len - remaining, len),
            )));
        }
        with_timeout(limit, context, async { Ok::<(), ProtocolError>(writer.write_all(&buffer[..read]).await?) }).await?;
        remaining -= read as u64;
    }
    writer.flush().await?;
    Ok(len)
}

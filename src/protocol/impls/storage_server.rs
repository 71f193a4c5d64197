use std::io::Cursor;
use byteorder::{BigEndian, ReadBytesExt};
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{unpack_fixed, FDFS_GROUP_NAME_MAX_LEN, IP_ADDRESS_SIZE, TRACKER_QUERY_STORAGE_FETCH_BODY_LEN, TRACKER_QUERY_STORAGE_STORE_BODY_LEN};
use crate::protocol::structs::storage_server::StorageServer;

impl StorageServer {
    /// Parses a store query reply: group, IP, port and store path index.
    pub fn from_store_body(body: &[u8]) -> Result<StorageServer, ProtocolError> {
        if body.len() != TRACKER_QUERY_STORAGE_STORE_BODY_LEN {
            return Err(ProtocolError::InvalidBody {
                context: "query storage store",
                reason: format!("expected {} bytes, received {}", TRACKER_QUERY_STORAGE_STORE_BODY_LEN, body.len()),
            });
        }
        let mut server = Self::parse_endpoint(body, "query storage store")?;
        server.store_path_index = body[TRACKER_QUERY_STORAGE_FETCH_BODY_LEN];
        Ok(server)
    }

    /// Parses a fetch or update query reply. Trailing extra IP addresses are ignored.
    pub fn from_fetch_body(body: &[u8], context: &'static str) -> Result<StorageServer, ProtocolError> {
        if body.len() < TRACKER_QUERY_STORAGE_FETCH_BODY_LEN {
            return Err(ProtocolError::InvalidBody {
                context,
                reason: format!("expected at least {} bytes, received {}", TRACKER_QUERY_STORAGE_FETCH_BODY_LEN, body.len()),
            });
        }
        Self::parse_endpoint(body, context)
    }

    fn parse_endpoint(body: &[u8], context: &'static str) -> Result<StorageServer, ProtocolError> {
        let ip_end = FDFS_GROUP_NAME_MAX_LEN + IP_ADDRESS_SIZE - 1;
        let group_name = unpack_fixed(&body[..FDFS_GROUP_NAME_MAX_LEN]);
        let ip_addr = unpack_fixed(&body[FDFS_GROUP_NAME_MAX_LEN..ip_end]);
        let port = Cursor::new(&body[ip_end..TRACKER_QUERY_STORAGE_FETCH_BODY_LEN]).read_i64::<BigEndian>()?;
        let port = u16::try_from(port).map_err(|_| ProtocolError::InvalidBody {
            context,
            reason: format!("port {} out of range", port),
        })?;
        Ok(StorageServer {
            group_name,
            ip_addr,
            port,
            store_path_index: 0,
        })
    }
}

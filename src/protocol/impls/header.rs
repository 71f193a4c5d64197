use std::io::Cursor;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::FDFS_PROTO_HEADER_LEN;
use crate::protocol::structs::header::Header;

impl Header {
    pub fn new(pkg_len: i64, cmd: u8, status: u8) -> Header {
        Header { pkg_len, cmd, status }
    }

    pub fn to_bytes(&self) -> [u8; FDFS_PROTO_HEADER_LEN] {
        let mut bytes = [0u8; FDFS_PROTO_HEADER_LEN];
        let mut cursor = Cursor::new(&mut bytes[..]);
        // Infallible: the buffer is exactly header sized.
        let _ = cursor.write_i64::<BigEndian>(self.pkg_len);
        let _ = cursor.write_u8(self.cmd);
        let _ = cursor.write_u8(self.status);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Header, ProtocolError> {
        let mut cursor = Cursor::new(bytes);
        Ok(Header {
            pkg_len: cursor.read_i64::<BigEndian>()?,
            cmd: cursor.read_u8()?,
            status: cursor.read_u8()?,
        })
    }
}

//! Cluster wire protocol.
//!
//! Every exchange is a request header, an optional body, a response header and an
//! optional response body. The header is 10 bytes:
//!
//! | Field     | Size | Encoding              |
//! |-----------|------|-----------------------|
//! | `pkg_len` | 8    | signed, big endian    |
//! | `cmd`     | 1    | command or response   |
//! | `status`  | 1    | `0` on success, errno |
//!
//! String fields (group names, IP addresses, extensions, prefixes) are fixed width and
//! NUL padded. A non-zero status is turned into [`ProtocolError::Status`](errors::ProtocolError)
//! after the response body has been drained, so the connection stays reusable.
//!
//! [`TrackerClient`](structs::tracker_client::TrackerClient) resolves storage endpoints and
//! [`StorageClient`](structs::storage_client::StorageClient) moves file content.

/// Error type for protocol exchanges.
pub mod errors;

/// Upload sources and download targets.
pub mod enums;

/// Implementation blocks for the codec and the protocol clients.
pub mod impls;

/// Command constants and framing helpers.
#[allow(clippy::module_inception)]
pub mod protocol;

/// Header, endpoint, response and client structures.
pub mod structs;

/// Unit tests for the codec.
pub mod tests;

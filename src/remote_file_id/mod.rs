//! Remote file identifier codec.
//!
//! A stored file is named externally by its group and its path inside that group, joined
//! by a single fixed delimiter: `group1/M00/00/00/wKgAAV9abc.txt`. The delimiter does not
//! depend on the platform the client runs on.
//!
//! # Example
//!
//! ```rust
//! use fdfs_client::remote_file_id::structs::remote_file_id::RemoteFileId;
//!
//! let id = RemoteFileId::decode("group1/M00/00/00/abc.txt").unwrap();
//! assert_eq!(id.group, "group1");
//! assert_eq!(id.path, "M00/00/00/abc.txt");
//! assert_eq!(id.to_string(), "group1/M00/00/00/abc.txt");
//! ```

/// Error type for identifier decoding.
pub mod errors;

/// Implementation blocks for the identifier codec.
pub mod impls;

/// The decoded identifier structure.
pub mod structs;

/// Unit tests for the identifier codec.
pub mod tests;

/// Separator between the group and the path of a remote file identifier.
pub const REMOTE_FILE_ID_DELIMITER: char = '/';

/// Encoding, decoding and conversions for `RemoteFileId`.
pub mod remote_file_id;

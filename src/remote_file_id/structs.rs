/// Decoded `group` + `path` pair.
pub mod remote_file_id;

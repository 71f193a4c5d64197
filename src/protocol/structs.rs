pub mod download_file_response;
pub mod header;
pub mod storage_client;
pub mod storage_server;
pub mod tracker_client;
pub mod upload_file_response;

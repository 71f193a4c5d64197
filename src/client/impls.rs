pub mod fdfs_client;

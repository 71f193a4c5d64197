use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Read a legacy client.conf instead of the TOML configuration.
    #[arg(long)]
    pub client_conf: Option<String>,

    /// Create the configuration file if it does not exist.
    #[arg(long)]
    pub create_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Upload a local file.
    Upload { path: PathBuf },

    /// Upload a local file as an appender file.
    UploadAppender { path: PathBuf },

    /// Upload a local file as a slave of an existing file.
    UploadSlave {
        path: PathBuf,
        master_file_id: String,
        #[arg(long, default_value = "_slave")]
        prefix: String,
    },

    /// Download a remote file into a local file.
    Download {
        remote_file_id: String,
        local: PathBuf,
        /// Byte offset to start from.
        #[arg(long, default_value_t = 0)]
        offset: u64,
        /// Bytes to read, 0 reads to the end.
        #[arg(long, default_value_t = 0)]
        size: u64,
    },

    /// Delete a remote file.
    Delete { remote_file_id: String },

    /// Send an active test to the tracker.
    Check,
}

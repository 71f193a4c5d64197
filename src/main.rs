use std::process::exit;
use std::sync::Arc;
use clap::{CommandFactory, Parser};
use log::{error, info, warn};
use serde_json::{json, Value};
use tokio::runtime::Builder;
use fdfs_client::client::errors::ClientError;
use fdfs_client::client::structs::fdfs_client::FdfsClient;
use fdfs_client::config::enums::configuration_error::ConfigurationError;
use fdfs_client::config::structs::configuration::Configuration;
use fdfs_client::logging::setup_logging;
use fdfs_client::registry::structs::pool_broker::PoolBroker;
use fdfs_client::structs::{Cli, Command};

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match load_configuration(&args) {
        Ok(config) => config,
        Err(created @ ConfigurationError::Created(_)) => {
            eprintln!("[CONFIG] {}", created);
            exit(0);
        }
        Err(error) => {
            eprintln!("[CONFIG] {}", error);
            exit(101);
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[CONFIG] {}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let Some(command) = args.command else {
        Cli::command().print_help()?;
        exit(2);
    };

    let result = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let broker = PoolBroker::start(&config);
            let result = run(broker.clone(), &config, command).await;
            if let Err(error) = broker.shutdown().await {
                warn!("[CLIENT] {}", error);
            }
            result
        });

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(client_error) => {
            error!("[CLIENT] {}", client_error);
            eprintln!("{}", client_error);
            exit(1);
        }
    }
}

fn load_configuration(args: &Cli) -> Result<Configuration, ConfigurationError>
{
    match &args.client_conf {
        Some(path) => Configuration::load_client_conf(path),
        None => Configuration::load_from_file(&args.config, args.create_config),
    }
}

async fn run(broker: Arc<PoolBroker>, config: &Configuration, command: Command) -> Result<Value, ClientError>
{
    let client = FdfsClient::new(broker, config).await?;
    let output = match command {
        Command::Upload { path } => {
            let uploaded = client.upload_by_filename(&path).await?;
            json!(uploaded)
        }
        Command::UploadAppender { path } => {
            let uploaded = client.upload_appender_by_filename(&path).await?;
            json!(uploaded)
        }
        Command::UploadSlave { path, master_file_id, prefix } => {
            let uploaded = client.upload_slave_by_filename(&path, &master_file_id, &prefix).await?;
            json!(uploaded)
        }
        Command::Download { remote_file_id, local, offset, size } => {
            let downloaded = client.download_to_file(&local, &remote_file_id, offset, size).await?;
            json!({
                "remote_file_id": downloaded.remote_file_id,
                "download_size": downloaded.download_size,
                "local": local.display().to_string()
            })
        }
        Command::Delete { remote_file_id } => {
            client.delete_file(&remote_file_id).await?;
            json!({ "deleted": remote_file_id })
        }
        Command::Check => {
            client.check_tracker().await?;
            json!({ "tracker": client.tracker_endpoint(), "status": "ok" })
        }
    };
    Ok(output)
}

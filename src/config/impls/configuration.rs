use std::fs::File;
use std::io::{ErrorKind, Write};
use std::time::Duration;
use log::LevelFilter;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::tracker_selection::TrackerSelection;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_server: String::from("127.0.0.1:22122"),
            tracker_selection: TrackerSelection::first_reachable,
            connect_timeout: 5,
            network_timeout: 30,
            tracker_pool: PoolConfig::default(),
            storage_pool: PoolConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`. With `create`, a missing file is replaced by the
    /// defaults and `ConfigurationError::Created` is returned so the caller can stop and
    /// let the operator edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(error)) if create && error.kind() == ErrorKind::NotFound => {
                let config_toml = toml::to_string(&Configuration::init())?;
                Configuration::save_file(path, config_toml)?;
                return Err(ConfigurationError::Created(path.to_string()));
            }
            Err(error) => return Err(error),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_client_conf(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Self::parse_client_conf(&String::from_utf8_lossy(&data))
    }

    /// Reads the legacy `key = value` client file. `tracker_server` may repeat; unknown
    /// keys such as `base_path` are ignored.
    pub fn parse_client_conf(data: &str) -> Result<Configuration, ConfigurationError> {
        let mut config = Configuration::init();
        let mut trackers: Vec<String> = Vec::new();

        for (index, raw_line) in data.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "tracker_server" => trackers.push(value.to_string()),
                "connect_timeout" => config.connect_timeout = Self::parse_seconds(key, value, index + 1)?,
                "network_timeout" => config.network_timeout = Self::parse_seconds(key, value, index + 1)?,
                "log_level" => config.log_level = value.to_lowercase(),
                _ => {}
            }
        }

        if trackers.is_empty() {
            return Err(ConfigurationError::NoTrackerServer);
        }
        config.tracker_server = trackers.join(",");
        config.validate()?;
        Ok(config)
    }

    fn parse_seconds(key: &str, value: &str, line: usize) -> Result<u64, ConfigurationError> {
        value.parse::<u64>().map_err(|_| ConfigurationError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            line,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.log_level_filter()?;
        self.tracker_config()?;
        self.tracker_pool.validate("tracker_pool")?;
        self.storage_pool.validate("storage_pool")?;
        Ok(())
    }

    pub fn tracker_config(&self) -> Result<TrackerConfig, ConfigurationError> {
        TrackerConfig::parse(&self.tracker_server)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(LevelFilter::Off),
            "trace" => Ok(LevelFilter::Trace),
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            _ => Err(ConfigurationError::UnknownLogLevel(self.log_level.clone())),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn network_timeout(&self) -> Duration {
        Duration::from_secs(self.network_timeout)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] toml::de::Error),

    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("invalid tracker_server entry '{0}'")]
    InvalidTrackerEntry(String),

    #[error("invalid port '{port}' in tracker_server entry '{entry}'")]
    InvalidTrackerPort { entry: String, port: String },

    #[error("no tracker_server configured")]
    NoTrackerServer,

    #[error("invalid value '{value}' for '{key}' on line {line}")]
    InvalidValue { key: String, value: String, line: usize },

    #[error("invalid {name} sizing: min_conns {min_conns}, max_conns {max_conns}")]
    InvalidPoolSize { name: &'static str, min_conns: usize, max_conns: usize },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("logging already initialized: {0}")]
    Logging(#[from] log::SetLoggerError),

    #[error("default configuration written to {0}, edit it and start again")]
    Created(String),
}

use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::tracker_config::TrackerConfig;

pub const DEFAULT_TRACKER_PORT: u16 = 22122;

static TRACKER_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<host>[^:\s]*)(?::(?P<port>\d+))?$").expect("tracker entry pattern is valid")
});

impl TrackerConfig {
    pub fn new(hosts: Vec<String>, port: u16) -> TrackerConfig {
        TrackerConfig { hosts, port }
    }

    /// Shapes a comma separated `host[:port]` list.
    ///
    /// The last explicit port wins and is shared by every host. Entries with an empty host
    /// (`:23000`) still contribute their port.
    pub fn parse(tracker_server: &str) -> Result<TrackerConfig, ConfigurationError> {
        let mut hosts: Vec<String> = Vec::new();
        let mut port = DEFAULT_TRACKER_PORT;

        for raw_entry in tracker_server.split(',') {
            let entry = raw_entry.trim();
            if entry.is_empty() {
                continue;
            }
            let captures = TRACKER_ENTRY
                .captures(entry)
                .ok_or_else(|| ConfigurationError::InvalidTrackerEntry(entry.to_string()))?;
            if let Some(entry_port) = captures.name("port") {
                port = match entry_port.as_str().parse::<u16>() {
                    Ok(parsed) if parsed > 0 => parsed,
                    _ => {
                        return Err(ConfigurationError::InvalidTrackerPort {
                            entry: entry.to_string(),
                            port: entry_port.as_str().to_string(),
                        });
                    }
                };
            }
            let host = &captures["host"];
            if !host.is_empty() {
                hosts.push(host.to_string());
            }
        }

        if hosts.is_empty() {
            return Err(ConfigurationError::NoTrackerServer);
        }
        Ok(TrackerConfig { hosts, port })
    }

    /// Every host paired with the shared port, in configuration order.
    pub fn endpoints(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.hosts.iter().map(move |host| (host.as_str(), self.port))
    }
}

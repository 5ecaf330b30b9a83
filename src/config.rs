use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWMATCH__)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        with_database_url_override(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PAWMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// DATABASE_URL wins over every other source when present
fn with_database_url_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("pawmatch-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[database]
url = "postgres://localhost/test"
"#
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.workers, None);
        assert_eq!(settings.database.url, "postgres://localhost/test");
        assert_eq!(settings.logging.level, "info");
    }
}

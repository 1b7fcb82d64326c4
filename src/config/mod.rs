use std::net::{IpAddr, Ipv4Addr};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// which of the two deployments this process runs as
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerVariant {
    /// file creation and retrieval on one port
    #[default]
    Combined,
    /// GET-only retrieval, with the startup location check
    ReadOnly,
}

impl ServerVariant {
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Combined => 7676,
            Self::ReadOnly => 7777,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ServerConfig {
    pub variant: ServerVariant,
    pub address: Option<IpAddr>,
    /// will be [`ServerVariant::default_port`] if not set
    pub port: Option<u16>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StorageConfig {
    /// directory every managed file lives under. Used verbatim as a path prefix, so keep the trailing slash
    pub root: String,
    #[serde(rename = "maxuploadbytes")]
    pub max_upload_bytes: u64,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StartupConfig {
    #[serde(rename = "executablename")]
    pub executable_name: String,
    /// will be on for [`ServerVariant::ReadOnly`] and off otherwise if not set
    #[serde(rename = "verifylocation")]
    pub verify_location: Option<bool>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct FileServerConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub startup: StartupConfig,
    pub log: LogConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: "/usr/local/bin/milkyteadrop-fs/".to_string(),
            max_upload_bytes: 64 * 1024 * 1024,
        }
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            executable_name: "milkyteadrop-fileserver".to_string(),
            verify_location: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn port(&self) -> u16 {
        self.server
            .port
            .unwrap_or_else(|| self.server.variant.default_port())
    }

    pub fn address(&self) -> IpAddr {
        self.server
            .address
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }

    pub fn verify_location(&self) -> bool {
        self.startup
            .verify_location
            .unwrap_or(self.server.variant == ServerVariant::ReadOnly)
    }

    /// where the running binary is expected to live
    pub fn expected_location(&self) -> String {
        format!("{}{}", self.storage.root, self.startup.executable_name)
    }
}

/// Parses the config file located at ./FileServer.toml, if it exists, with
/// `FILE_SERVER_`-prefixed environment variables layered on top.
/// A missing file is fine and leaves every value at its default
pub fn parse_config() -> Result<FileServerConfig, ConfigError> {
    parse_config_from("./FileServer.toml", environment())
}

/// `FILE_SERVER_STORAGE__ROOT` sets `storage.root`, and so on
fn environment() -> Environment {
    Environment::with_prefix("FILE_SERVER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn parse_config_from(path: &str, environment: Environment) -> Result<FileServerConfig, ConfigError> {
    Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(environment)
        .build()?
        .try_deserialize()
}

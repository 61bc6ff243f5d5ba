use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use humantime::parse_duration;
use serde::Deserialize;

use crate::constants::{DEFAULT_CHAT_MODELS, DEFAULT_EMBEDDING_MODELS, DEFAULT_HOST, DEFAULT_PORT};
use crate::model::ModelRegistry;
use crate::server::LatencySimulator;

#[derive(Parser, Debug, Clone)]
#[command(name = "openai-mock-server")]
#[command(about = "deterministic mock of the openai chat, embeddings and models api")]
pub struct Config {
    #[arg(long, default_value = DEFAULT_HOST, help = "address to listen on")]
    pub host: String,

    #[arg(long, help = "port to run the server on (overrides config file)")]
    pub port: Option<u16>,

    #[arg(
        long,
        value_parser = parse_latency,
        help = "minimum latency to simulate, e.g. 100ms (overrides config file)"
    )]
    pub min_latency: Option<Duration>,

    #[arg(
        long,
        value_parser = parse_latency,
        help = "maximum latency to simulate, e.g. 500ms (overrides config file)"
    )]
    pub max_latency: Option<Duration>,

    #[arg(long, help = "path to JSON configuration file")]
    pub config: Option<String>,

    #[arg(
        long,
        default_value = "info",
        help = "log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

pub fn validate_config(config: &Config) -> Result<(), String> {
    if config.host.parse::<IpAddr>().is_err() {
        return Err(format!("invalid listen host: {}", config.host));
    }
    if config
        .log_level
        .to_lowercase()
        .parse::<log::LevelFilter>()
        .is_err()
    {
        return Err(format!("invalid log level: {}", config.log_level));
    }
    Ok(())
}

/// Settings shared read-only by every request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub min_latency: Duration,
    pub max_latency: Duration,
    pub models: ModelRegistry,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            min_latency: Duration::ZERO,
            max_latency: Duration::ZERO,
            models: ModelRegistry::new(
                DEFAULT_CHAT_MODELS.iter().map(|m| m.to_string()).collect(),
                DEFAULT_EMBEDDING_MODELS
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            ),
        }
    }
}

impl ServiceConfig {
    /// Defaults, then the config file (if any), then explicit flags.
    pub fn resolve(cli: &Config) -> Self {
        let mut config = match cli.config.as_deref() {
            Some(path) => load_config_file(path).unwrap_or_else(|e| {
                log::warn!(
                    "failed to load config file {}: {}. using default and command-line settings",
                    path,
                    e
                );
                ServiceConfig::default()
            }),
            None => ServiceConfig::default(),
        };

        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(min_latency) = cli.min_latency {
            config.min_latency = min_latency;
        }
        if let Some(max_latency) = cli.max_latency {
            config.max_latency = max_latency;
        }

        config
    }

    pub fn latency(&self) -> LatencySimulator {
        LatencySimulator::new(self.min_latency, self.max_latency)
    }

    pub fn listen_addr(&self, host: &str) -> Result<SocketAddr, String> {
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|_| format!("invalid listen host: {}", host))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Duration {
        field: &'static str,
        source: humantime::DurationError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Json(e) => write!(f, "invalid config JSON: {}", e),
            ConfigError::Duration { field, source } => {
                write!(f, "invalid {}: {}", field, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    min_latency: Option<String>,
    #[serde(default)]
    max_latency: Option<String>,
    #[serde(default)]
    models: Option<ConfigFileModels>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFileModels {
    #[serde(default)]
    embedding: Option<Vec<String>>,
    #[serde(default)]
    chat: Option<Vec<String>>,
}

pub fn load_config_file(path: impl AsRef<Path>) -> Result<ServiceConfig, ConfigError> {
    let raw = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
    parse_config_file(&raw)
}

pub fn parse_config_file(raw: &str) -> Result<ServiceConfig, ConfigError> {
    let file: ConfigFile = serde_json::from_str(raw).map_err(ConfigError::Json)?;
    let defaults = ServiceConfig::default();

    let min_latency = parse_latency_field("min_latency", file.min_latency.as_deref())?
        .unwrap_or(defaults.min_latency);
    let max_latency = parse_latency_field("max_latency", file.max_latency.as_deref())?
        .unwrap_or(defaults.max_latency);

    let models = file.models.unwrap_or_default();
    let chat = models
        .chat
        .unwrap_or_else(|| defaults.models.chat().to_vec());
    let embedding = models
        .embedding
        .unwrap_or_else(|| defaults.models.embedding().to_vec());

    Ok(ServiceConfig {
        port: file.port.unwrap_or(defaults.port),
        min_latency,
        max_latency,
        models: ModelRegistry::new(chat, embedding),
    })
}

fn parse_latency_field(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<Duration>, ConfigError> {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    parse_latency(text)
        .map(Some)
        .map_err(|source| ConfigError::Duration { field, source })
}

/// humantime grammar, plus a bare `0` for "no latency".
pub fn parse_latency(text: &str) -> Result<Duration, humantime::DurationError> {
    if text.trim() == "0" {
        return Ok(Duration::ZERO);
    }
    parse_duration(text.trim())
}

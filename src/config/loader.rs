//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Path probed when no `--config` argument is given.
pub const DEFAULT_CONFIG_PATH: &str = "relay.toml";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration: optional TOML file, then environment overlay,
/// then semantic validation.
///
/// With an explicit `path` the file must exist. Without one the default
/// path is used when present and the built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(p) => read_file(p)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                read_file(default)?
            } else {
                RelayConfig::default()
            }
        }
    };

    apply_env(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn read_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment-supplied settings onto the file/default config.
///
/// The mail account never comes from the file; `PORT` mirrors the
/// conventional deployment override and only replaces the port part of
/// the bind address.
fn apply_env(config: &mut RelayConfig) {
    if let Ok(host) = std::env::var("SMTP_RELAY") {
        config.mail.relay_host = host;
    }
    if let Ok(user) = std::env::var("SMTP_USER") {
        config.mail.user = Some(user);
    }
    if let Ok(pass) = std::env::var("SMTP_PASS") {
        config.mail.password = Some(pass);
    }
    if let Ok(recipient) = std::env::var("RECIPIENT_EMAIL") {
        config.mail.recipient = Some(recipient);
    }
    if let Ok(port) = std::env::var("PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.server.set_port(port),
            Err(_) => tracing::warn!(value = %port, "Ignoring unparseable PORT override"),
        }
    }
}

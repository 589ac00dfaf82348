use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output directory served as the site root.
    pub dist_dir: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn dist_path(&self) -> PathBuf {
        PathBuf::from(&self.dist_dir)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT` from the environment wins over either source.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = match config_path_next_to_exe() {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Read { path, source })?;
            parse_config(&contents)?
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    apply_port_override(&mut config, std::env::var("PORT").ok().as_deref())?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn apply_port_override(config: &mut Config, port: Option<&str>) -> Result<(), ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let port = raw
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
    tracing::info!("PORT override: {}", port);
    config.server.port = port;
    Ok(())
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.server,
            ServerConfig {
                host: "0.0.0.0".into(),
                port: 3000,
                dist_dir: "dist".into(),
            }
        );
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let err = parse_config("[database]\npath = \"app.db\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_port_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();

        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.server.port, 3000);

        apply_port_override(&mut config, Some("  ")).unwrap();
        assert_eq!(config.server.port, 3000);

        apply_port_override(&mut config, Some("8080")).unwrap();
        assert_eq!(config.server.port, 8080);

        let err = apply_port_override(&mut config, Some("http")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "http"));
        assert_eq!(config.server.port, 8080);
    }
}

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
    /// Notifications loaded into the store at startup
    #[serde(default)]
    pub notifications: Vec<SeedNotification>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {}", self.host, self.port, e))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    /// Directory with the wasm-bindgen output, served under `/pkg`
    pub pkg_dir: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            pkg_dir: "crates/frontend/pkg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedNotification {
    pub is_action: bool,
    pub product_name: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[frontend]
pkg_dir = "crates/frontend/pkg"

[[notifications]]
is_action = true
product_name = "ミラーレス一眼カメラ"
message = "商品が購入されました。発送の準備をしてください。"

[[notifications]]
is_action = true
product_name = "デニムジャケット"
message = "商品が購入されました。発送の準備をしてください。"

[[notifications]]
is_action = false
product_name = "ワイヤレスイヤホン"
message = "購入した商品が発送されました。"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.server.socket_addr()?;
    Ok(config)
}

/// Resolve the wasm bundle directory.
///
/// Relative paths are tried against the working directory first (`cargo run`
/// from the workspace root), then against the executable directory.
pub fn get_pkg_dir(config: &Config) -> PathBuf {
    let pkg_dir = Path::new(&config.frontend.pkg_dir);

    if pkg_dir.is_absolute() || pkg_dir.exists() {
        return pkg_dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(pkg_dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    tracing::warn!(
        "wasm bundle directory {} not found, /pkg will answer 404",
        pkg_dir.display()
    );
    pkg_dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.frontend.pkg_dir, "crates/frontend/pkg");
        assert_eq!(config.notifications.len(), 3);
        assert!(config.notifications[0].is_action);
        assert!(!config.notifications[2].is_action);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.socket_addr().unwrap().port(), 3000);
        assert!(config.notifications.is_empty());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let err = parse_config("[server]\nhost = \"not a host\"\nport = 80\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_seed_with_timestamp() {
        let config = parse_config(
            r#"
[[notifications]]
is_action = false
product_name = "本"
message = "発送されました"
created_at = "2024-05-01T10:00:00Z"
"#,
        )
        .unwrap();
        let seed = &config.notifications[0];
        assert_eq!(
            seed.created_at.unwrap().to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }
}

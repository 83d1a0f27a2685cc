use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory holding the built front-end (index.html, wasm, static assets)
    pub dist_dir: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
dist_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
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
    Ok(config)
}

/// Resolve the dist directory. Relative paths are taken from the current
/// directory when it exists there, otherwise from the executable directory.
pub fn get_dist_path(config: &Config) -> PathBuf {
    let dist = Path::new(&config.site.dist_dir);

    if dist.is_absolute() || dist.exists() {
        return dist.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dist);
        }
    }

    dist.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.dist_dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").is_err());
    }

    #[test]
    fn test_bad_host_is_error() {
        let config = parse_config(
            "[server]\nhost = \"not a host\"\nport = 8080\n[site]\ndist_dir = \"dist\"\n",
        )
        .unwrap();
        assert!(config.server.socket_addr().is_err());
    }

    #[test]
    fn test_absolute_dist_path_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("site-dist");
        config.site.dist_dir = absolute.display().to_string();
        assert_eq!(get_dist_path(&config), absolute);
    }
}

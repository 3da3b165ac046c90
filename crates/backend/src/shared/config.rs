use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub inquiries: InquiriesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory with the built frontend (index.html, wasm, styles)
    pub dist_dir: String,
    /// Optional JSON document replacing the built-in site content
    #[serde(default)]
    pub content_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InquiriesConfig {
    /// Webhook that receives every accepted inquiry as JSON
    #[serde(default)]
    pub forward_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for InquiriesConfig {
    fn default() -> Self {
        Self {
            forward_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
dist_dir = "crates/frontend/dist"

[inquiries]
timeout_secs = 10
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
    Ok(config)
}

/// Resolve a configured path.
/// Absolute paths are kept; relative ones are taken from the working
/// directory when they exist there, otherwise from the executable directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(path);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.dist_dir, "crates/frontend/dist");
        assert!(config.site.content_path.is_none());
        assert!(config.inquiries.forward_url.is_none());
        assert_eq!(config.inquiries.timeout_secs, 10);
    }

    #[test]
    fn test_inquiries_section_is_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [site]
            dist_dir = "dist"
            content_path = "content/site.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.content_path.as_deref(), Some("content/site.json"));
        assert_eq!(config.inquiries.timeout_secs, 10);
    }

    #[test]
    fn test_missing_server_section_is_an_error() {
        assert!(parse_config("[site]\ndist_dir = \"dist\"\n").is_err());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let abs = std::env::temp_dir().join("site.json");
        let abs_str = abs.to_string_lossy().to_string();
        assert_eq!(resolve_path(&abs_str), abs);
    }
}

use anyhow::Context;
use contracts::domain::a001_travel_package::SlugFallback;
use contracts::shared::pagination::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub inquiry: InquiryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог со статикой сайта; без него отдаётся только API
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON с пакетами; без него используется встроенный набор
    pub dataset_path: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub slug_fallback: SlugFallback,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InquiryConfig {
    /// Webhook внешней таблицы; без него заявки только пишутся в лог
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            page_size: default_page_size(),
            slug_fallback: SlugFallback::default(),
        }
    }
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
page_size = 6
slug_fallback = "first"

[inquiry]
timeout_secs = 10
"#;

impl Config {
    /// Разбор TOML с проверкой значений
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents).context("Invalid config.toml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.catalog.page_size == 0 {
            anyhow::bail!("catalog.page_size must be greater than zero");
        }
        if self.inquiry.timeout_secs == 0 || self.inquiry.timeout_secs > 300 {
            anyhow::bail!("inquiry.timeout_secs must be between 1 and 300");
        }
        if let Some(endpoint) = &self.inquiry.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                anyhow::bail!("inquiry.endpoint must be an HTTP or HTTPS URL");
            }
        }
        Ok(())
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            return Config::from_toml(&contents);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    Config::from_toml(DEFAULT_CONFIG)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Resolves relative paths relative to the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let candidate = Path::new(path);

    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    match exe_dir() {
        Some(dir) => dir.join(candidate),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.page_size, 6);
        assert_eq!(config.catalog.slug_fallback, SlugFallback::First);
        assert!(config.catalog.dataset_path.is_none());
        assert!(config.inquiry.endpoint.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.catalog.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.inquiry.timeout_secs, 10);
    }

    #[test]
    fn test_slug_fallback_parses() {
        let config = Config::from_toml("[catalog]\nslug_fallback = \"not-found\"\n").unwrap();
        assert_eq!(config.catalog.slug_fallback, SlugFallback::NotFound);
    }

    #[test]
    fn test_validation_errors() {
        let err = Config::from_toml("[catalog]\npage_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("page_size"));

        let err = Config::from_toml("[inquiry]\nendpoint = \"ftp://sheet\"\n").unwrap_err();
        assert!(err.to_string().contains("HTTP"));

        assert!(Config::from_toml("[server]\nport = \"abc\"\n").is_err());
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let absolute = std::env::temp_dir().join("packages.json");
        let resolved = resolve_path(absolute.to_str().unwrap());
        assert_eq!(resolved, absolute);
    }
}

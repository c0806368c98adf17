//! TOML configuration parsing.
//!
//! ```toml
//! [db]
//! path = "./data/pura.sqlite"
//!
//! [search]
//! excerpt_length = 200
//! excerpt_lead = 50
//!
//! [server]
//! bind = "127.0.0.1:7340"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! `[search]` and `[logging]` may be omitted.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use pura_search_core::excerpt::{DEFAULT_LEAD, DEFAULT_MAX_LENGTH};
use pura_search_core::search::SearchParams;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub search: SearchConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    #[serde(default = "default_excerpt_lead")]
    pub excerpt_lead: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_MAX_LENGTH,
            excerpt_lead: DEFAULT_LEAD,
        }
    }
}

fn default_excerpt_length() -> usize {
    DEFAULT_MAX_LENGTH
}
fn default_excerpt_lead() -> usize {
    DEFAULT_LEAD
}

impl SearchConfig {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            excerpt_length: self.excerpt_length,
            excerpt_lead: self.excerpt_lead,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default `tracing` filter, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.search.excerpt_length == 0 {
        anyhow::bail!("search.excerpt_length must be >= 1");
    }

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_optional_sections() {
        let cfg = parse_config(
            r#"
[db]
path = "/tmp/pura.sqlite"

[server]
bind = "127.0.0.1:9000"
"#,
        )
        .unwrap();
        assert_eq!(cfg.search.excerpt_length, 200);
        assert_eq!(cfg.search.excerpt_lead, 50);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.search.params(), SearchParams::default());
    }

    #[test]
    fn test_custom_search_section() {
        let cfg = parse_config(
            r#"
[db]
path = "/tmp/pura.sqlite"

[search]
excerpt_length = 120

[server]
bind = "0.0.0.0:7340"

[logging]
level = "pura_search=debug"
"#,
        )
        .unwrap();
        assert_eq!(cfg.search.excerpt_length, 120);
        assert_eq!(cfg.search.excerpt_lead, 50);
        assert_eq!(cfg.logging.level, "pura_search=debug");
    }

    #[test]
    fn test_rejects_zero_excerpt_length() {
        let err = parse_config(
            r#"
[db]
path = "/tmp/pura.sqlite"

[search]
excerpt_length = 0

[server]
bind = "127.0.0.1:7340"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("excerpt_length"));
    }

    #[test]
    fn test_missing_db_section_fails() {
        assert!(parse_config("[server]\nbind = \"127.0.0.1:7340\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/pura.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

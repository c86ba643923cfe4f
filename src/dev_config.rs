//! Dev server and build configuration.
//!
//! Pure declarative data consumed by external tooling (dev server, bundler).
//! Nothing in this crate acts on these values at runtime; they are loaded,
//! edited and written back as TOML.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebConfig {
    pub dev_server: DevServerConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DevServerConfig {
    /// Local dev server listening port
    pub port: u16,

    /// Proxy rules keyed by path prefix
    pub proxy: BTreeMap<String, ProxyRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyRule {
    /// Upstream origin requests under this prefix are forwarded to
    pub target: String,

    /// Rewrite the Host header to match the target origin
    #[serde(default)]
    pub change_origin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// Module path aliases, e.g. "@" -> "src"
    pub alias: BTreeMap<String, String>,

    /// Named build entry points
    pub pages: BTreeMap<String, PageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Entry module path, relative to the project root
    pub entry: String,

    /// Human-readable page title
    pub title: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            dev_server: DevServerConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl Default for DevServerConfig {
    fn default() -> Self {
        let mut proxy = BTreeMap::new();
        proxy.insert(
            "/api".to_string(),
            ProxyRule {
                target: "http://localhost:8080".to_string(),
                change_origin: true,
            },
        );
        Self { port: 8081, proxy }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        let mut alias = BTreeMap::new();
        alias.insert("@".to_string(), "src".to_string());

        let mut pages = BTreeMap::new();
        pages.insert(
            "index".to_string(),
            PageConfig {
                entry: "src/main.js".to_string(),
                title: "Atuin Web UI".to_string(),
            },
        );
        Self { alias, pages }
    }
}

impl WebConfig {
    /// Load config from a TOML file, falling back to defaults if the file
    /// does not exist. Malformed TOML is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write the config as pretty TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_devserver_toml() {
        let config = WebConfig::default();
        assert_eq!(config.dev_server.port, 8081);

        let rule = &config.dev_server.proxy["/api"];
        assert_eq!(rule.target, "http://localhost:8080");
        assert!(rule.change_origin);

        assert_eq!(config.build.alias["@"], "src");
        let page = &config.build.pages["index"];
        assert_eq!(page.entry, "src/main.js");
        assert_eq!(page.title, "Atuin Web UI");
    }

    #[test]
    fn parses_the_checked_in_file() {
        let config: WebConfig = toml::from_str(include_str!("../devserver.toml")).unwrap();
        assert_eq!(config, WebConfig::default());
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config: WebConfig = toml::from_str("[dev_server]\nport = 9000\n").unwrap();
        assert_eq!(config.dev_server.port, 9000);
        // Unmentioned sections keep their defaults
        assert_eq!(config.build, BuildConfig::default());
    }

    #[test]
    fn missing_file_loads_defaults_and_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("devserver.toml");

        let config = WebConfig::load(&path).unwrap();
        assert_eq!(config, WebConfig::default());

        config.save(&path).unwrap();
        assert_eq!(WebConfig::load(&path).unwrap(), config);
    }
}

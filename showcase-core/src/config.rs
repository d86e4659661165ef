use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShowcaseError};

/// Showcase configuration, read from `~/.showcase/config.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub build: BuildConfig,
    pub serve: ServeConfig,
    pub launch: LaunchConfig,
}

/// Where `export` writes the static bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
    /// Pretty-print JSON bundles with this indent (0 = compact)
    pub json_indent: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            json_indent: 2,
        }
    }
}

/// Static file server ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Bind address; the default exposes the server on the local network
    pub host: IpAddr,
    pub dev_port: u16,
    pub preview_port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            dev_port: 5173,
            preview_port: 4173,
        }
    }
}

impl ServeConfig {
    pub fn dev_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.dev_port)
    }

    pub fn preview_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.preview_port)
    }
}

/// What the start hook runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Shell-style command line spawned on "Launch"; unset = log only
    pub command: Option<String>,
}

impl ShowcaseConfig {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ShowcaseError::io(path, e))?;
        toml::from_str(&content).map_err(|source| ShowcaseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write this config as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ShowcaseError::io(parent, e))?;
        }
        fs::write(path, self.to_toml()?).map_err(|e| ShowcaseError::io(path, e))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// `~/.showcase`
    pub fn state_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".showcase")
    }

    /// `~/.showcase/config.toml`
    pub fn config_path() -> PathBuf {
        Self::state_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_packaging_contract() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert_eq!(config.serve.dev_port, 5173);
        assert_eq!(config.serve.preview_port, 4173);
        assert!(config.serve.host.is_unspecified());
        assert_eq!(config.serve.dev_addr().to_string(), "0.0.0.0:5173");
        assert!(config.launch.command.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ShowcaseConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[serve]\ndev_port = 8080\n\n[launch]\ncommand = \"magic-pipeline --demo\"\n",
        )
        .unwrap();

        let config = ShowcaseConfig::load_from(&path).unwrap();
        assert_eq!(config.serve.dev_port, 8080);
        assert_eq!(config.serve.preview_port, 4173);
        assert_eq!(config.build, BuildConfig::default());
        assert_eq!(config.launch.command.as_deref(), Some("magic-pipeline --demo"));
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[serve\n").unwrap();

        let err = ShowcaseConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ShowcaseConfig::default();
        config.build.out_dir = PathBuf::from("public");
        config.save_to(&path).unwrap();

        assert_eq!(ShowcaseConfig::load_from(&path).unwrap(), config);
    }
}

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration, loadable from a TOML file.
///
/// `data_path: None` serves from a fresh in-memory catalog; `Some(path)`
/// serves from the JSON file catalog at that path, creating it on the first
/// commit.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            data_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(c.data_path.is_none());
    }

    #[test]
    fn load_full_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmdbook.toml");
        std::fs::write(
            &path,
            "bind_addr = \"0.0.0.0:9000\"\ndata_path = \"/var/lib/cmdbook/catalog.json\"\n",
        )
        .unwrap();

        let c = ServerConfig::load(&path).unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            c.data_path,
            Some(PathBuf::from("/var/lib/cmdbook/catalog.json"))
        );
    }

    #[test]
    fn missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmdbook.toml");
        std::fs::write(&path, "bind_addr = \"127.0.0.1:7777\"\n").unwrap();

        let c = ServerConfig::load(&path).unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:7777".parse::<SocketAddr>().unwrap());
        assert!(c.data_path.is_none());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmdbook.toml");
        std::fs::write(&path, "bind_addr = not-an-addr").unwrap();

        match ServerConfig::load(&path) {
            Err(ServerError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match ServerConfig::load("/nonexistent/cmdbook.toml") {
            Err(ServerError::Io(_)) => {}
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}

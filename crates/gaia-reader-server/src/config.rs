use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gaia_reader_core::DiskSettings;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub disk: DiskSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8008".parse().unwrap(),
            disk: DiskSettings::new("."),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8008".parse::<SocketAddr>().unwrap());
        assert_eq!(c.disk.storage_root_directory, PathBuf::from("."));
    }

    #[test]
    fn from_file_parses_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.toml");
        std::fs::write(
            &path,
            "bind_addr = \"0.0.0.0:8008\"\n\n[disk]\nstorage_root_directory = \"/var/gaia\"\n",
        )
        .unwrap();
        let c = ServerConfig::from_file(&path).unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:8008".parse::<SocketAddr>().unwrap());
        assert_eq!(c.disk.storage_root_directory, PathBuf::from("/var/gaia"));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = ServerConfig::from_file("/no/such/reader.toml").unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[test]
    fn from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.toml");
        std::fs::write(&path, "bind_addr = not-an-addr").unwrap();
        let err = ServerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}

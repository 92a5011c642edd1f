use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use jsoncmp_diff::{DiffOptions, Differ};

use crate::error::{ServerError, ServerResult};

/// Server settings, loadable from a TOML file.
///
/// Every key is optional; missing keys take their default value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Document shown on the left side of `/compare/json`.
    pub left_document: PathBuf,
    /// Document shown on the right side of `/compare/json`.
    pub right_document: PathBuf,
    pub diff: DiffOptions,
    /// Upper bound on request bodies accepted by `/v1/compare`.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            left_document: PathBuf::from("left.json"),
            right_document: PathBuf::from("right.json"),
            diff: DiffOptions::default(),
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn differ(&self) -> Differ {
        Differ::new(self.diff)
    }
}

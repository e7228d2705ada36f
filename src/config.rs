//! Service Configuration
//!
//! Loaded from environment variables (a `.env` file is honoured by `main`):
//! - `PORT`: listen port (default: 8080)
//! - `STORE_BACKEND`: `memory` | `dynamodb` (default: memory)
//! - `CATALOG_SEED`: JSON file of catalog items loaded into the memory backend
//!
//! Table and index names are not configurable; see `access::schema`.

use crate::catalog::CatalogItem;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable held a value that cannot be used.
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    /// The catalog seed file could not be read.
    #[error("cannot read catalog seed {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog seed file is not a JSON array of items.
    #[error("cannot parse catalog seed {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which key-value store the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Process-local tables, empty unless seeded.
    #[default]
    Memory,
    /// Managed DynamoDB tables reached with ambient credentials.
    DynamoDb,
}

impl StoreBackend {
    /// Parse backend name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "dynamodb" => Some(Self::DynamoDb),
            _ => None,
        }
    }
}

/// Runtime configuration of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub backend: StoreBackend,
    pub catalog_seed: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend: StoreBackend::default(),
            catalog_seed: None,
        }
    }
}

impl ServiceConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port.clone(),
            })?;
        }

        if let Some(backend) = lookup("STORE_BACKEND") {
            config.backend =
                StoreBackend::parse(backend.trim()).ok_or(ConfigError::InvalidValue {
                    name: "STORE_BACKEND",
                    value: backend.clone(),
                })?;
        }

        config.catalog_seed = lookup("CATALOG_SEED")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Address the HTTP server binds to (all interfaces).
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Loads the catalog seed file, or an empty catalog when none is set.
    pub fn load_catalog_seed(&self) -> Result<Vec<CatalogItem>, ConfigError> {
        let Some(path) = &self.catalog_seed else {
            return Ok(Vec::new());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedIo {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
            path: path.clone(),
            source,
        })
    }
}

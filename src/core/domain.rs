use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub const BOOKS_PATH: &str = "/api/v1/books";
pub const REDIRECT_PATH: &str = "/redirect";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> Option<i64>;
}

// ServerMode selects how the router is hosted
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum ServerMode {
    Http,
    Lambda,
}

impl FromStr for ServerMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(ServerMode::Http),
            "lambda" => Ok(ServerMode::Lambda),
            other => Err(LibraryError::invalid_argument(
                format!("unknown server mode {}", other).as_str(), Some("BOOKSHELF_SERVER".to_string()))),
        }
    }
}

// Configuration abstracts config options for the book service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub env: String,
    pub server: ServerMode,
    pub bind_addr: SocketAddr,
    pub store: RepositoryStore,
    pub log_level: String,
}

impl Configuration {
    pub fn new(env: &str) -> Self {
        Configuration {
            env: env.to_string(),
            server: ServerMode::Http,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            store: RepositoryStore::InMemory,
            log_level: "info".to_string(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let env = lookup("BOOKSHELF_ENV").unwrap_or_else(|| "dev".to_string());
        let server = lookup("BOOKSHELF_SERVER").unwrap_or_else(|| "http".to_string()).parse::<ServerMode>()?;
        let addr = lookup("BOOKSHELF_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.parse::<SocketAddr>().map_err(|err| LibraryError::invalid_argument(
            format!("invalid bind address {} due to {}", addr, err).as_str(), Some("BOOKSHELF_BIND_ADDR".to_string())))?;
        let store = lookup("BOOKSHELF_STORE").unwrap_or_else(|| "memory".to_string()).parse::<RepositoryStore>()?;
        let log_level = lookup("BOOKSHELF_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        tracing::Level::from_str(log_level.as_str()).map_err(|err| LibraryError::invalid_argument(
            format!("invalid log level {} due to {}", log_level, err).as_str(), Some("BOOKSHELF_LOG_LEVEL".to_string())))?;
        Ok(Configuration {
            env,
            server,
            bind_addr,
            store,
            log_level,
        })
    }

    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

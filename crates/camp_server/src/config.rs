//! Process configuration for `camp-server`.
//!
//! Every option can come from a flag or an environment variable; flags win.

use camp_core::db::{open_db, open_db_in_memory, DbResult};
use camp_core::default_log_level;
use clap::Parser;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

const SQLITE_SCHEME: &str = "sqlite://";
const MEMORY_TARGET: &str = ":memory:";

#[derive(Debug, Clone, Parser)]
#[command(name = "camp-server")]
#[command(about = "HTTP API for campers, activities and signups", version)]
pub struct ServerConfig {
    /// Database file path or `sqlite:///path` URI; `:memory:` for a scratch store.
    #[arg(long, env = "DB_URI", default_value = "camp.db")]
    pub database: String,

    /// Socket address to listen on.
    #[arg(long, env = "CAMP_BIND", default_value = "127.0.0.1:5555")]
    pub bind: SocketAddr,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "CAMP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; stderr when unset.
    #[arg(long, env = "CAMP_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    pub fn database_location(&self) -> Result<DatabaseLocation, ConfigError> {
        DatabaseLocation::parse(&self.database)
    }

    /// Starts the process logger from `log_level` and `log_dir`.
    pub fn init_logging(&self) -> Result<(), String> {
        match &self.log_dir {
            Some(dir) => {
                let dir = dir
                    .to_str()
                    .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", dir.display()))?;
                camp_core::init_logging(self.log_level(), dir)
            }
            None => camp_core::init_stderr_logging(self.log_level()),
        }
    }
}

/// Resolved storage target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    Memory,
    File(PathBuf),
}

impl DatabaseLocation {
    /// Accepts a plain path, `:memory:`, or a `sqlite://` URI.
    ///
    /// `sqlite:///camp.db` is relative, `sqlite:////var/camp.db` absolute,
    /// and a bare `sqlite://` selects memory.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let target = match trimmed.strip_prefix(SQLITE_SCHEME) {
            Some("") => return Ok(Self::Memory),
            Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
            None if trimmed.contains("://") => {
                return Err(ConfigError::UnsupportedScheme(trimmed.to_string()))
            }
            None => trimmed,
        };

        match target {
            "" => Err(ConfigError::EmptyDatabasePath),
            MEMORY_TARGET => Ok(Self::Memory),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }

    pub fn open(&self) -> DbResult<Connection> {
        match self {
            Self::Memory => open_db_in_memory(),
            Self::File(path) => open_db(path),
        }
    }
}

impl Display for DatabaseLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str(MEMORY_TARGET),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedScheme(String),
    EmptyDatabasePath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedScheme(uri) => {
                write!(f, "unsupported database uri `{uri}`; only sqlite is available")
            }
            Self::EmptyDatabasePath => write!(f, "database path cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

//! Command-line and environment configuration for the server binary.

use crate::persist::WriteMode;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// Server settings, from flags or `REGISTRY_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "initiative-registry")]
#[command(about = "REST backend persisting initiatives and users to JSON files")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "REGISTRY_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Directory holding initiatives.json and users.json. Created if missing.
    #[arg(long, env = "REGISTRY_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// How saves replace the store files.
    #[arg(long, env = "REGISTRY_WRITE_MODE", value_enum, default_value_t = WriteModeArg::Atomic)]
    pub write_mode: WriteModeArg,

    /// Write single-line JSON instead of indented JSON.
    #[arg(long, env = "REGISTRY_COMPACT")]
    pub compact: bool,

    /// Default level when RUST_LOG is not set.
    #[arg(long, env = "REGISTRY_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Emit logs as JSON lines.
    #[arg(long, env = "REGISTRY_LOG_JSON")]
    pub log_json: bool,
}

/// Command-line spelling of [`WriteMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WriteModeArg {
    /// Temp file plus rename.
    Atomic,
    /// Truncate and overwrite the file itself.
    InPlace,
}

impl From<WriteModeArg> for WriteMode {
    fn from(arg: WriteModeArg) -> Self {
        match arg {
            WriteModeArg::Atomic => WriteMode::Atomic,
            WriteModeArg::InPlace => WriteMode::InPlace,
        }
    }
}

impl Config {
    /// `true` unless `--compact` was given.
    pub fn pretty(&self) -> bool {
        !self.compact
    }

    /// The store-level write mode.
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode.into()
    }
}

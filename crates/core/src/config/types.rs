use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::prober::ProberConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub prober: ProberConfig,
}

/// Library configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Directory scanned for video files.
    #[serde(default = "default_library_dir")]
    pub directory: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            directory: default_library_dir(),
        }
    }
}

fn default_library_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("curator.db")
}

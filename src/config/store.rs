use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const DEFAULT_CREDENTIALS_PATH: &str = ".storefront/credentials.json";

/// Where the bearer token is kept between runs. We differentiate backends via a "type" tag.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(tag = "type")]
pub enum StoreConfig {
    /// Durable storage in a JSON document on disk.
    #[serde(rename = "file")]
    File(FileStoreConfig),
    /// Process-local storage; the token is gone when the process exits.
    #[serde(rename = "memory")]
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File(FileStoreConfig::default())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct FileStoreConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_CREDENTIALS_PATH)
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::{file_store::FileTokenStore, memory_store::MemoryTokenStore};
use crate::config::StoreConfig;

/// Failures of the underlying credential storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("credential document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The TokenStore trait holds exactly one bearer token (set, get, remove).
///
/// No validation happens here; a stored token may be expired or malformed.
/// Writes replace the previous value wholesale, last writer wins.
pub trait TokenStore: Send + Sync {
    fn set(&self, token: &str) -> Result<(), StoreError>;
    fn get(&self) -> Result<Option<String>, StoreError>;
    /// Removing an absent token is not an error.
    fn remove(&self) -> Result<(), StoreError>;
    fn name(&self) -> &str;
}

/// Creates a concrete store implementation based on the StoreConfig.
pub fn create_store(config: &StoreConfig) -> Arc<dyn TokenStore> {
    match config {
        StoreConfig::File(file_config) => {
            info!(
                "Using file token store at '{}'",
                file_config.path.display()
            );
            Arc::new(FileTokenStore::new(file_config.path.clone()))
        }
        StoreConfig::Memory => {
            info!("Using in-memory token store; credentials will not survive a restart.");
            Arc::new(MemoryTokenStore::new())
        }
    }
}

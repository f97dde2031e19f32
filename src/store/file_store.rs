use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{StoreError, TokenStore};

/// On-disk document. The bearer token is its only entry.
#[derive(Serialize, Deserialize, Debug, Default)]
struct CredentialDocument {
    token: Option<String>,
}

/// Persists the token as a small JSON document so it survives restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<CredentialDocument>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // Staged in a sibling file, then renamed into place.
    fn write_document(&self, document: &CredentialDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, serde_json::to_vec(document)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, token: &str) -> Result<(), StoreError> {
        debug!("Persisting token to '{}'", self.path.display());
        self.write_document(&CredentialDocument {
            token: Some(token.to_string()),
        })
    }

    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_document()?.and_then(|doc| doc.token))
    }

    fn remove(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed stored token at '{}'", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(
                    "Failed to remove token file '{}': {}",
                    self.path.display(),
                    e
                );
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

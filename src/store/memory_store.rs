use std::sync::RwLock;

use super::{StoreError, TokenStore};

/// Keeps the token in process memory only.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, handy for tests.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Result<Option<String>, StoreError> {
        let slot = self.token.read().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn remove(&self) -> Result<(), StoreError> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

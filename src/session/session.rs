use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::claims::{decode_claims, Claims};
use crate::store::{StoreError, TokenStore};

/// Why the stored credential does not grant a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("no credential is stored")]
    Missing,
    #[error("stored credential is malformed: {0}")]
    Malformed(String),
    #[error("stored credential expired at {exp}")]
    Expired { exp: i64 },
}

/// A valid session: the raw token together with its decoded claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthData {
    pub token: String,
    pub claims: Claims,
}

/// Explicit session context shared by the gateway, the route guard and every controller.
///
/// Nothing is cached: each query reads the store and decodes the token again, so a
/// token that expires mid-use is noticed the next time anyone asks.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// The raw stored token, valid or not. Storage failures read as "no token".
    pub fn token(&self) -> Option<String> {
        match self.store.get() {
            Ok(token) => token,
            Err(e) => {
                warn!("Token store '{}' could not be read: {}", self.store.name(), e);
                None
            }
        }
    }

    /// Stores the token returned by sign-in or sign-up, verbatim.
    pub fn sign_in_with(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(token)?;
        info!("Stored new credential in '{}' store", self.store.name());
        Ok(())
    }

    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove()?;
        info!("Credential removed");
        Ok(())
    }

    /// Full evaluation against the current wall clock.
    pub fn evaluate(&self) -> Result<AuthData, CredentialError> {
        self.evaluate_at(Utc::now().timestamp())
    }

    /// Evaluates the stored credential as of `now` (seconds since the epoch).
    pub fn evaluate_at(&self, now: i64) -> Result<AuthData, CredentialError> {
        let token = self.token().ok_or(CredentialError::Missing)?;
        let claims = decode_claims(&token).map_err(CredentialError::Malformed)?;
        if claims.is_expired_at(now) {
            return Err(CredentialError::Expired { exp: claims.exp });
        }
        Ok(AuthData { token, claims })
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now().timestamp())
    }

    /// Fails closed. An expired token is also removed from the store.
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        match self.evaluate_at(now) {
            Ok(_) => true,
            Err(CredentialError::Expired { exp }) => {
                debug!("Credential expired at {}; discarding it", exp);
                if let Err(e) = self.store.remove() {
                    warn!("Failed to discard expired credential: {}", e);
                }
                false
            }
            Err(e) => {
                debug!("Not authenticated: {}", e);
                false
            }
        }
    }

    pub fn auth_data(&self) -> Option<AuthData> {
        self.auth_data_at(Utc::now().timestamp())
    }

    /// Same failure conditions as [`Session::is_authenticated_at`], without touching the store.
    pub fn auth_data_at(&self, now: i64) -> Option<AuthData> {
        self.evaluate_at(now).ok()
    }
}

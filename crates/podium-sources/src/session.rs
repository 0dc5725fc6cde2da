//! Session cache for the imported professional-network profile
//!
//! Three keys are kept together: the access token, its absolute expiry in
//! epoch milliseconds, and the profile record as JSON. An expired or
//! unreadable entry is removed the next time it is read.

use podium_domain::traits::SessionStore;
use podium_domain::StructuredProfile;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, warn};

/// Key of the access token
pub const TOKEN_KEY: &str = "linkedin_access_token";
/// Key of the token expiry (epoch milliseconds)
pub const EXPIRY_KEY: &str = "linkedin_token_expiry";
/// Key of the profile record (JSON)
pub const PROFILE_KEY: &str = "linkedin_profile_data";

/// Errors from the session cache
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The underlying store failed
    #[error("Session store error: {0}")]
    Store(String),

    /// The profile could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Profile session over any [`SessionStore`]
#[derive(Debug)]
pub struct ProfileSession<S> {
    store: S,
}

impl<S> ProfileSession<S>
where
    S: SessionStore,
    S::Error: Display,
{
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    fn store_err(e: S::Error) -> SessionError {
        SessionError::Store(e.to_string())
    }

    /// Cache a profile with a token valid for `expires_in_secs` from now
    pub fn connect(
        &mut self,
        token: &str,
        expires_in_secs: u64,
        profile: &StructuredProfile,
    ) -> Result<(), SessionError> {
        self.connect_at(token, expires_in_secs, profile, now_millis())
    }

    /// [`ProfileSession::connect`] with an explicit clock
    pub fn connect_at(
        &mut self,
        token: &str,
        expires_in_secs: u64,
        profile: &StructuredProfile,
        now_ms: u64,
    ) -> Result<(), SessionError> {
        let expiry = now_ms.saturating_add(expires_in_secs.saturating_mul(1000));
        let json = serde_json::to_string(profile)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;

        self.store.set(TOKEN_KEY, token).map_err(Self::store_err)?;
        self.store
            .set(EXPIRY_KEY, &expiry.to_string())
            .map_err(Self::store_err)?;
        self.store.set(PROFILE_KEY, &json).map_err(Self::store_err)?;

        debug!("Cached profile {} until {}", profile.id, expiry);
        Ok(())
    }

    /// The cached profile, if its token has not expired
    pub fn restore(&mut self) -> Result<Option<StructuredProfile>, SessionError> {
        self.restore_at(now_millis())
    }

    /// [`ProfileSession::restore`] with an explicit clock
    pub fn restore_at(&mut self, now_ms: u64) -> Result<Option<StructuredProfile>, SessionError> {
        let token = self.store.get(TOKEN_KEY).map_err(Self::store_err)?;
        let expiry = self.store.get(EXPIRY_KEY).map_err(Self::store_err)?;
        let profile = self.store.get(PROFILE_KEY).map_err(Self::store_err)?;

        let (Some(_), Some(expiry), Some(profile)) = (token, expiry, profile) else {
            return Ok(None);
        };

        let expired = expiry.trim().parse::<u64>().map_or(true, |at| now_ms >= at);
        if expired {
            debug!("Cached profile expired, clearing session");
            self.disconnect()?;
            return Ok(None);
        }

        match serde_json::from_str(&profile) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!("Cached profile is unreadable, clearing session: {}", e);
                self.disconnect()?;
                Ok(None)
            }
        }
    }

    /// The cached token, without checking expiry
    pub fn access_token(&self) -> Result<Option<String>, SessionError> {
        self.store.get(TOKEN_KEY).map_err(Self::store_err)
    }

    /// Remove all three keys
    pub fn disconnect(&mut self) -> Result<(), SessionError> {
        for key in [TOKEN_KEY, EXPIRY_KEY, PROFILE_KEY] {
            self.store.delete(key).map_err(Self::store_err)?;
        }
        Ok(())
    }
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), Self::Error> {
        self.values.remove(key);
        Ok(())
    }
}

//! Persisted session state: the bearer token and the cached profile.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use core_types::UserProfile;

use crate::Result;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON profile snapshot.
pub const PROFILE_KEY: &str = "userData";

/// Synchronous string key/value storage that survives page reloads.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// In-memory storage.
///
/// Clones share the same map, so a test can hand one clone to a
/// `Session` and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a token.
    pub fn with_token(token: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(TOKEN_KEY.to_string(), token.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed view of the session keys in a `Storage`.
#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    storage: S,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored token. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    /// The cached profile snapshot, if one parses.
    pub fn profile(&self) -> Option<UserProfile> {
        let raw = self.storage.get(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("Ignoring unreadable profile snapshot: {e}");
                None
            }
        }
    }

    pub fn set_profile(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.storage.set(PROFILE_KEY, &json)
    }

    pub fn clear_profile(&self) {
        self.storage.remove(PROFILE_KEY);
    }

    /// Profile to show at startup: only read when a token is present.
    pub fn bootstrap_profile(&self) -> Option<UserProfile> {
        self.token()?;
        self.profile()
    }

    /// Persist the credentials handed back by a successful login.
    pub fn sign_in(&self, token: &str, profile: Option<&UserProfile>) -> Result<()> {
        self.set_token(token)?;
        match profile {
            Some(profile) => self.set_profile(profile),
            None => Ok(()),
        }
    }

    /// Forget both the token and the profile snapshot.
    pub fn sign_out(&self) {
        self.clear_token();
        self.clear_profile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::FullName;

    fn sample_profile() -> UserProfile {
        UserProfile {
            email: "ada@example.com".to_string(),
            full_name: FullName {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            tokens: 42,
        }
    }

    #[test]
    fn test_token_roundtrip_and_clear() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());

        assert!(session.token().is_none());

        session.set_token("abc123").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));

        session.clear_token();
        assert!(session.token().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let session = Session::new(MemoryStorage::with_token("   "));

        assert!(session.token().is_none());
    }

    #[test]
    fn test_profile_stored_as_camel_case_json() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());

        session.set_profile(&sample_profile()).unwrap();

        let raw = storage.get(PROFILE_KEY).unwrap();
        assert!(raw.contains("\"fullName\""));
        assert_eq!(session.profile(), Some(sample_profile()));
    }

    #[test]
    fn test_corrupt_profile_is_ignored() {
        let storage = MemoryStorage::with_token("abc123");
        storage.set(PROFILE_KEY, "{not json").unwrap();
        let session = Session::new(storage);

        assert!(session.profile().is_none());
        assert!(session.bootstrap_profile().is_none());
    }

    #[test]
    fn test_bootstrap_profile_requires_token() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());
        session.set_profile(&sample_profile()).unwrap();

        assert!(session.bootstrap_profile().is_none());

        session.set_token("abc123").unwrap();
        assert_eq!(session.bootstrap_profile(), Some(sample_profile()));
    }

    #[test]
    fn test_sign_in_and_sign_out() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());

        session.sign_in("tok", Some(&sample_profile())).unwrap();
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert!(session.profile().is_some());

        session.sign_out();
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(PROFILE_KEY).is_none());
    }

    #[test]
    fn test_sign_in_without_profile_keeps_previous_snapshot() {
        let session = Session::new(MemoryStorage::new());
        session.set_profile(&sample_profile()).unwrap();

        session.sign_in("tok", None).unwrap();

        assert_eq!(session.profile(), Some(sample_profile()));
    }
}

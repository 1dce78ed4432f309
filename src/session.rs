//! Session context.
//!
//! The login flow leaves a bearer token and an employee profile snapshot in
//! the device's secure storage. Screens read both through a [`Session`]
//! handed to them, rather than reaching into storage themselves.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeProfile;

/// Secure storage key holding the bearer token.
pub const TOKEN_KEY: &str = "jwtToken";

/// Secure storage key holding the employee profile JSON.
pub const PROFILE_KEY: &str = "employee";

/// Key/value access to the device's secure storage.
pub trait SecureStore {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
}

/// An in-memory [`SecureStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under `key`, replacing any previous value.
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    /// Removes the value under `key`.
    pub fn delete_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

impl SecureStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

/// A bearer token for the employee API.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Normalises a stored token.
    ///
    /// Tokens are sometimes stored JSON-encoded, wrapped in double quotes.
    /// One leading and one trailing quote are stripped. Returns `None` if
    /// nothing is left.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::session::Token;
    ///
    /// let token = Token::from_stored("\"abc.def\"").unwrap();
    /// assert_eq!(token.as_str(), "abc.def");
    /// assert_eq!(token.authorization_header(), "Bearer abc.def");
    /// assert!(Token::from_stored("\"\"").is_none());
    /// ```
    pub fn from_stored(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw.strip_prefix('"').unwrap_or(raw);
        let raw = raw.strip_suffix('"').unwrap_or(raw);
        (!raw.is_empty()).then(|| Self(raw.to_string()))
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Typed access to the current session.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: SecureStore> Session<S> {
    /// Creates a session over a secure store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the session token, if one is stored.
    pub fn token(&self) -> Option<Token> {
        self.store
            .get_item(TOKEN_KEY)
            .and_then(|raw| Token::from_stored(&raw))
    }

    /// Returns the session token or [`EngineError::MissingToken`].
    pub fn require_token(&self) -> EngineResult<Token> {
        self.token().ok_or(EngineError::MissingToken)
    }

    /// Returns the stored employee profile, if one is stored and readable.
    ///
    /// An unreadable profile is logged and treated as absent.
    pub fn profile(&self) -> Option<EmployeeProfile> {
        match self.read_profile() {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "Ignoring stored employee profile");
                None
            }
        }
    }

    /// Reads the stored employee profile, reporting parse failures.
    pub fn read_profile(&self) -> EngineResult<Option<EmployeeProfile>> {
        let Some(raw) = self.store.get_item(PROFILE_KEY) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| EngineError::InvalidProfile {
                message: e.to_string(),
            })
    }

    /// Returns the branch name from the stored profile.
    pub fn branch_name(&self) -> Option<String> {
        self.profile()
            .and_then(|profile| profile.branch_name().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(items: &[(&str, &str)]) -> Session<MemoryStore> {
        let mut store = MemoryStore::new();
        for (key, value) in items {
            store.set_item(*key, *value);
        }
        Session::new(store)
    }

    #[test]
    fn test_token_strips_quotes() {
        let session = session_with(&[(TOKEN_KEY, "\"eyJhbGciOi.abc\"")]);
        assert_eq!(session.token().unwrap().as_str(), "eyJhbGciOi.abc");
    }

    #[test]
    fn test_unquoted_token_kept() {
        let session = session_with(&[(TOKEN_KEY, "plain-token")]);
        assert_eq!(session.token().unwrap().as_str(), "plain-token");
    }

    #[test]
    fn test_missing_token() {
        let session = session_with(&[]);
        assert!(session.token().is_none());
        assert_eq!(session.require_token(), Err(EngineError::MissingToken));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = Token::from_stored("secret").unwrap();
        assert_eq!(format!("{:?}", token), "Token(<redacted>)");
    }

    #[test]
    fn test_profile_and_branch_name() {
        let session = session_with(&[(
            PROFILE_KEY,
            r#"{ "id": 12, "fullName": "Ravi K", "branch": { "branchName": "City Branch" } }"#,
        )]);

        let profile = session.profile().unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ravi K"));
        assert_eq!(session.branch_name().as_deref(), Some("City Branch"));
    }

    #[test]
    fn test_unreadable_profile_is_absent() {
        let session = session_with(&[(PROFILE_KEY, "{not json")]);
        assert!(session.profile().is_none());
        assert!(matches!(
            session.read_profile(),
            Err(EngineError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_deleted_item_is_gone() {
        let mut store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "abc");
        store.delete_item(TOKEN_KEY);
        assert!(Session::new(store).token().is_none());
    }
}

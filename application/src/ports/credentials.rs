//! Credential resolution port
//!
//! Defines how the tool factory looks up the secrets a tool needs. The
//! process-environment adapter lives in the infrastructure layer.

use std::collections::HashMap;

/// Port for resolving named credentials
///
/// Implementations must treat an empty value as absent.
pub trait CredentialResolver: Send + Sync {
    /// Resolve a credential by name (e.g. `"EXA_API_KEY"`)
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Resolver that never finds anything
pub struct NoCredentials;

impl CredentialResolver for NoCredentials {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}

/// In-memory credentials, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }
}

impl CredentialResolver for StaticCredentials {
    fn resolve(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_resolve() {
        let credentials = StaticCredentials::new().with("EXA_API_KEY", "k");
        assert_eq!(credentials.resolve("EXA_API_KEY"), Some("k".to_string()));
        assert_eq!(credentials.resolve("SERPER_API_KEY"), None);
    }

    #[test]
    fn test_empty_value_is_absent() {
        let credentials = StaticCredentials::new().with("EXA_API_KEY", "");
        assert_eq!(credentials.resolve("EXA_API_KEY"), None);
    }

    #[test]
    fn test_no_credentials() {
        assert_eq!(NoCredentials.resolve("GITHUB_TOKEN"), None);
    }
}

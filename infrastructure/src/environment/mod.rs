//! Environment adapters
//!
//! Provides [`ProcessEnvironment`], the [`CredentialResolver`] used in
//! production: credentials are read from the process environment at the
//! moment a tool is built and are never cached.

use humanoid_application::CredentialResolver;

/// Resolves credentials from the process environment
///
/// Unset, empty and non-UTF-8 variables all count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl CredentialResolver for ProcessEnvironment {
    fn resolve(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

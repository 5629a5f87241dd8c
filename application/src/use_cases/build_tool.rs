//! Build tool use case
//!
//! [`ToolFactory`] turns a tool identifier and a bag of named arguments into a
//! constructed tool instance, or a typed [`ToolBuildError`] saying why not.
//!
//! # Pipeline
//!
//! ```text
//! build(kind, args)
//!   │
//!   ├─ 1. catalog.lookup(kind)            ── UnknownTool
//!   ├─ 2. resolve required credentials    ── MissingCredential (first missing)
//!   ├─ 3. schema.validate(args)           ── InvalidArgumentType (first mismatch)
//!   └─ 4. descriptor.constructor()        ── ConstructionFailed
//! ```
//!
//! Credential failures take priority over argument failures: argument kinds
//! are not examined until every credential resolved. Nothing is cached, so
//! two calls with the same environment and arguments behave identically.

use crate::ports::credentials::CredentialResolver;
use humanoid_domain::{
    Credentials, ToolArguments, ToolBuildError, ToolCatalog, ToolDescriptor, ToolInstance,
    ToolKind,
};
use std::sync::Arc;
use tracing::debug;

/// Validating factory over a tool catalog
///
/// Cheap to clone; clones share the catalog and the credential resolver.
#[derive(Clone)]
pub struct ToolFactory {
    catalog: Arc<ToolCatalog>,
    credentials: Arc<dyn CredentialResolver>,
}

impl ToolFactory {
    pub fn new(catalog: Arc<ToolCatalog>, credentials: Arc<dyn CredentialResolver>) -> Self {
        Self {
            catalog,
            credentials,
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Build one tool instance.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`ToolBuildError`]; see the module docs
    /// for the order in which checks run.
    pub fn build(
        &self,
        kind: ToolKind,
        args: &ToolArguments,
    ) -> Result<ToolInstance, ToolBuildError> {
        let descriptor = self.catalog.lookup(kind)?;
        let credentials = self.resolve_credentials(descriptor)?;
        let validated = descriptor.argument_schema.validate(kind, args)?;

        let instance = descriptor
            .constructor()
            .construct(&credentials, &validated)
            .map_err(|source| ToolBuildError::ConstructionFailed { tool: kind, source })?;

        debug!(tool = %kind, arguments = validated.len(), "Built tool");
        Ok(instance)
    }

    /// Build a tool from its identifier string.
    ///
    /// Names that are not a tool kind fail with `UnknownTool`, the same as
    /// kinds missing from the catalog.
    pub fn build_by_name(
        &self,
        name: &str,
        args: &ToolArguments,
    ) -> Result<ToolInstance, ToolBuildError> {
        self.build(name.parse()?, args)
    }

    fn resolve_credentials(
        &self,
        descriptor: &ToolDescriptor,
    ) -> Result<Credentials, ToolBuildError> {
        let mut credentials = Credentials::new();

        for name in &descriptor.required_credentials {
            let value = self.credentials.resolve(name).ok_or_else(|| {
                ToolBuildError::MissingCredential {
                    tool: descriptor.kind,
                    credential: name.clone(),
                }
            })?;
            credentials.insert(name.as_str(), value);
        }

        Ok(credentials)
    }
}

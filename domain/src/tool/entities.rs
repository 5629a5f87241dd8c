//! Tool domain entities

use std::collections::HashMap;
use std::sync::Arc;

use super::error::ToolBuildError;
use super::kind::ToolKind;
use super::traits::ToolConstructor;
use super::value_objects::{ArgumentSchema, ArgumentType};

/// Static declaration of how to validate and build one tool kind
#[derive(Clone)]
pub struct ToolDescriptor {
    pub kind: ToolKind,
    /// Human-readable description
    pub description: String,
    /// Environment variables that must be set before construction, in check order
    pub required_credentials: Vec<String>,
    pub argument_schema: ArgumentSchema,
    constructor: Arc<dyn ToolConstructor>,
}

impl ToolDescriptor {
    pub fn new<C: ToolConstructor + 'static>(
        kind: ToolKind,
        description: impl Into<String>,
        constructor: C,
    ) -> Self {
        Self::with_shared_constructor(kind, description, Arc::new(constructor))
    }

    pub fn with_shared_constructor(
        kind: ToolKind,
        description: impl Into<String>,
        constructor: Arc<dyn ToolConstructor>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            required_credentials: Vec::new(),
            argument_schema: ArgumentSchema::new(),
            constructor,
        }
    }

    pub fn with_credential(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required_credentials.contains(&name) {
            self.required_credentials.push(name);
        }
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, expected: ArgumentType) -> Self {
        self.argument_schema = self.argument_schema.with(name, expected);
        self
    }

    pub fn constructor(&self) -> &dyn ToolConstructor {
        self.constructor.as_ref()
    }

    pub fn requires_credentials(&self) -> bool {
        !self.required_credentials.is_empty()
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("kind", &self.kind)
            .field("required_credentials", &self.required_credentials)
            .field("argument_schema", &self.argument_schema)
            .finish_non_exhaustive()
    }
}

/// Catalog of tool descriptors
///
/// Iteration order is the order in which descriptors were registered.
/// Each kind has at most one descriptor.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    descriptors: Vec<ToolDescriptor>,
    /// Kind -> position in `descriptors`
    index: HashMap<ToolKind, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor (builder pattern).
    ///
    /// Registering a kind twice replaces the earlier descriptor in place.
    pub fn register(mut self, descriptor: ToolDescriptor) -> Self {
        match self.index.get(&descriptor.kind) {
            Some(&position) => self.descriptors[position] = descriptor,
            None => {
                self.index.insert(descriptor.kind, self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
        self
    }

    /// All registered kinds, in registration order
    pub fn list_identifiers(&self) -> Vec<ToolKind> {
        self.descriptors.iter().map(|d| d.kind).collect()
    }

    pub fn lookup(&self, kind: ToolKind) -> Result<&ToolDescriptor, ToolBuildError> {
        self.index
            .get(&kind)
            .map(|&position| &self.descriptors[position])
            .ok_or_else(|| ToolBuildError::UnknownTool(kind.to_string()))
    }

    /// Look up by identifier string. Unparseable and unregistered names
    /// both fail with `UnknownTool`.
    pub fn lookup_name(&self, name: &str) -> Result<&ToolDescriptor, ToolBuildError> {
        self.lookup(name.parse()?)
    }

    pub fn contains(&self, kind: ToolKind) -> bool {
        self.index.contains_key(&kind)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// A copy of this catalog with the given kinds removed, order preserved
    pub fn without(&self, excluded: &[ToolKind]) -> Self {
        self.descriptors
            .iter()
            .filter(|d| !excluded.contains(&d.kind))
            .cloned()
            .fold(ToolCatalog::new(), ToolCatalog::register)
    }
}

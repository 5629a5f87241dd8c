//! Configured tool instances
//!
//! [`ConfiguredTool`] is the instance produced by every built-in descriptor:
//! the tool kind plus the credentials and validated arguments the external
//! tool implementation will be started with. [`ConfiguredToolConstructor`]
//! checks the construction-time requirements of the underlying tool, i.e. the
//! arguments for which it has no usable default.

use humanoid_domain::{
    ConstructionError, Credentials, Tool, ToolArguments, ToolConstructor, ToolInstance, ToolKind,
};
use serde_json::Value;

/// Arguments a tool cannot be constructed without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentRequirement {
    /// Every argument has a default
    None,
    /// All of these must be supplied
    All(&'static [&'static str]),
    /// At least one of these must be supplied
    AnyOf(&'static [&'static str]),
}

impl ArgumentRequirement {
    fn check(&self, args: &ToolArguments) -> Result<(), ConstructionError> {
        match self {
            ArgumentRequirement::None => Ok(()),
            ArgumentRequirement::All(names) => {
                for name in *names {
                    require_non_empty(args, name)?;
                }
                Ok(())
            }
            ArgumentRequirement::AnyOf(names) => {
                if names.iter().any(|name| args.contains_key(*name)) {
                    Ok(())
                } else {
                    Err(ConstructionError::MissingAnyArgument(
                        names.iter().map(|n| n.to_string()).collect(),
                    ))
                }
            }
        }
    }
}

fn require_non_empty(args: &ToolArguments, name: &str) -> Result<(), ConstructionError> {
    match args.get(name) {
        None => Err(ConstructionError::MissingArgument(name.to_string())),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ConstructionError::InvalidValue {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// A tool wired with its configuration, ready to hand to the execution engine
#[derive(Debug, Clone)]
pub struct ConfiguredTool {
    kind: ToolKind,
    description: String,
    credentials: Credentials,
    arguments: ToolArguments,
}

impl ConfiguredTool {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn arguments(&self) -> &ToolArguments {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// Keyword settings as the external tool receives them: credentials under
    /// their lower-cased names, then the supplied arguments.
    pub fn settings(&self) -> ToolArguments {
        let mut settings = self.credentials.as_arguments();
        settings.extend(self.arguments.iter().map(|(k, v)| (k.clone(), v.clone())));
        settings
    }
}

impl Tool for ConfiguredTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Constructor shared by all built-in descriptors
#[derive(Debug, Clone)]
pub struct ConfiguredToolConstructor {
    kind: ToolKind,
    description: &'static str,
    requirement: ArgumentRequirement,
}

impl ConfiguredToolConstructor {
    pub fn new(kind: ToolKind, description: &'static str) -> Self {
        Self {
            kind,
            description,
            requirement: ArgumentRequirement::None,
        }
    }

    pub fn with_requirement(mut self, requirement: ArgumentRequirement) -> Self {
        self.requirement = requirement;
        self
    }
}

impl ToolConstructor for ConfiguredToolConstructor {
    fn construct(
        &self,
        credentials: &Credentials,
        args: &ToolArguments,
    ) -> Result<ToolInstance, ConstructionError> {
        self.requirement.check(args)?;

        Ok(Box::new(ConfiguredTool {
            kind: self.kind,
            description: self.description.to_string(),
            credentials: credentials.clone(),
            arguments: args.clone(),
        }))
    }
}

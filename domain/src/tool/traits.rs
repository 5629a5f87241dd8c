//! Tool domain traits
//!
//! [`Tool`] is the opaque capability handed to the execution engine.
//! [`ToolConstructor`] is the capability a descriptor delegates to when an
//! instance is built. Both are pure domain traits with no I/O.

use super::error::ConstructionError;
use super::kind::ToolKind;
use super::value_objects::{Credentials, ToolArguments};

/// A constructed tool, ready to be handed to an agent
///
/// The registry never looks past these accessors; the shape of the
/// instance belongs to the tool implementation.
pub trait Tool: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> ToolKind;

    /// Name the tool is exposed under
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    fn description(&self) -> &str;
}

/// Owned, type-erased tool instance
pub type ToolInstance = Box<dyn Tool>;

/// Builds a tool from validated arguments and resolved credentials
///
/// `args` only ever contains arguments declared in the descriptor's schema,
/// already checked for kind. Absent arguments are left to the tool's own
/// defaults.
pub trait ToolConstructor: Send + Sync {
    fn construct(
        &self,
        credentials: &Credentials,
        args: &ToolArguments,
    ) -> Result<ToolInstance, ConstructionError>;
}

impl<F> ToolConstructor for F
where
    F: Fn(&Credentials, &ToolArguments) -> Result<ToolInstance, ConstructionError> + Send + Sync,
{
    fn construct(
        &self,
        credentials: &Credentials,
        args: &ToolArguments,
    ) -> Result<ToolInstance, ConstructionError> {
        self(credentials, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Echo;

    impl Tool for Echo {
        fn kind(&self) -> ToolKind {
            ToolKind::CodeInterpreter
        }

        fn description(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_default_name_is_kind() {
        assert_eq!(Echo.name(), "code_interpreter");
    }

    #[test]
    fn test_closure_is_a_constructor() {
        let constructor = |_: &Credentials, args: &ToolArguments| {
            if args.contains_key("fail") {
                Err(ConstructionError::Other("asked to fail".to_string()))
            } else {
                Ok(Box::new(Echo) as ToolInstance)
            }
        };

        let ok = constructor.construct(&Credentials::new(), &ToolArguments::new());
        assert_eq!(ok.unwrap().kind(), ToolKind::CodeInterpreter);

        let mut args = ToolArguments::new();
        args.insert("fail".to_string(), serde_json::Value::Bool(true));
        assert!(constructor.construct(&Credentials::new(), &args).is_err());
    }
}

//! Tools configuration from TOML (`[tools]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [tools]
//! disabled = ["code_interpreter", "composio_tool"]   # or "code_interpreter,composio_tool"
//! concurrent = true
//! diagnostics_log = "~/.cache/humanoid/tools.jsonl"
//! ```

use humanoid_domain::{ConfigIssue, ConfigIssueCode, Severity, ToolCatalog, ToolKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Raw tools configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Tool identifiers removed from the catalog; a single comma-separated
    /// string is accepted as well (`HUMANOID_TOOLS__DISABLED=a,b`)
    #[serde(deserialize_with = "tool_list")]
    pub disabled: Vec<String>,
    /// Build tools on the blocking pool when collecting availability
    pub concurrent: bool,
    /// Append one JSON line per unavailable tool to this file
    pub diagnostics_log: Option<PathBuf>,
}

impl FileToolsConfig {
    /// Parse `disabled` into tool kinds.
    ///
    /// Unknown names are skipped and reported as warnings.
    pub fn disabled_kinds(&self) -> (Vec<ToolKind>, Vec<ConfigIssue>) {
        let mut kinds = Vec::new();
        let mut issues = Vec::new();

        for name in &self.disabled {
            match name.parse::<ToolKind>() {
                Ok(kind) => {
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                }
                Err(_) => issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::UnknownTool {
                        field: "tools.disabled".to_string(),
                        value: name.clone(),
                    },
                    message: format!("tools.disabled: unknown tool '{}', ignoring", name),
                }),
            }
        }

        (kinds, issues)
    }

    /// `diagnostics_log` with a leading `~` expanded to the home directory
    pub fn diagnostics_log_path(&self) -> Option<PathBuf> {
        self.diagnostics_log.as_deref().map(expand_home)
    }

    /// The given catalog minus the disabled tools.
    pub fn apply(&self, catalog: &ToolCatalog) -> ToolCatalog {
        catalog.without(&self.disabled_kinds().0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ToolList {
    Many(Vec<String>),
    Joined(String),
}

fn tool_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match ToolList::deserialize(deserializer)? {
        ToolList::Many(names) => names,
        ToolList::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanoid_domain::{
        ConstructionError, Credentials, ToolArguments, ToolDescriptor, ToolInstance,
    };

    fn catalog() -> ToolCatalog {
        [ToolKind::CodeInterpreter, ToolKind::FileReadTool, ToolKind::VisionTool]
            .into_iter()
            .map(|kind| {
                ToolDescriptor::new(
                    kind,
                    "test",
                    |_: &Credentials, _: &ToolArguments| -> Result<ToolInstance, _> {
                        Err(ConstructionError::Other("not built in this test".to_string()))
                    },
                )
            })
            .fold(ToolCatalog::new(), ToolCatalog::register)
    }

    #[test]
    fn test_deserialize_tools_section() {
        let toml_str = r#"
[tools]
disabled = ["code_interpreter"]
concurrent = true
diagnostics_log = "/tmp/tools.jsonl"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tools.disabled, vec!["code_interpreter"]);
        assert!(config.tools.concurrent);
        assert_eq!(
            config.tools.diagnostics_log,
            Some(PathBuf::from("/tmp/tools.jsonl"))
        );
    }

    #[test]
    fn test_disabled_accepts_comma_separated_string() {
        let toml_str = r#"
[tools]
disabled = "vision_tool, code_interpreter,,"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tools.disabled, vec!["vision_tool", "code_interpreter"]);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_diagnostics_log_expands_home() {
        let config = FileToolsConfig {
            diagnostics_log: Some(PathBuf::from("~/.cache/humanoid/tools.jsonl")),
            ..Default::default()
        };
        let expected = match dirs::home_dir() {
            Some(home) => home.join(".cache/humanoid/tools.jsonl"),
            None => PathBuf::from("~/.cache/humanoid/tools.jsonl"),
        };
        assert_eq!(config.diagnostics_log_path(), Some(expected));
    }

    #[test]
    fn test_diagnostics_log_plain_paths_unchanged() {
        for raw in ["/tmp/tools.jsonl", "logs/tools.jsonl", "~user/tools.jsonl"] {
            let config = FileToolsConfig {
                diagnostics_log: Some(PathBuf::from(raw)),
                ..Default::default()
            };
            assert_eq!(config.diagnostics_log_path(), Some(PathBuf::from(raw)));
        }
        assert_eq!(FileToolsConfig::default().diagnostics_log_path(), None);
    }

    #[test]
    fn test_disabled_kinds_reports_unknown_names() {
        let config = FileToolsConfig {
            disabled: vec![
                "vision_tool".to_string(),
                "Vision_Tool".to_string(),
                "vision_tool".to_string(),
            ],
            ..Default::default()
        };

        let (kinds, issues) = config.disabled_kinds();
        assert_eq!(kinds, vec![ToolKind::VisionTool]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::UnknownTool { value, .. } if value == "Vision_Tool"
        ));
    }

    #[test]
    fn test_apply_removes_disabled_tools() {
        let config = FileToolsConfig {
            disabled: vec!["code_interpreter".to_string(), "bogus".to_string()],
            ..Default::default()
        };

        let filtered = config.apply(&catalog());
        assert_eq!(
            filtered.list_identifiers(),
            vec![ToolKind::FileReadTool, ToolKind::VisionTool]
        );
    }

    #[test]
    fn test_apply_with_nothing_disabled_keeps_catalog() {
        let filtered = FileToolsConfig::default().apply(&catalog());
        assert_eq!(filtered.len(), 3);
    }
}

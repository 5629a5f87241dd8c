//! Crew configuration entities

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use crate::tool::ToolKind;

/// Configuration for an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub id: String,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default)]
    pub allow_delegation: bool,
    #[serde(default)]
    pub verbose: bool,
}

/// Reference to an agent by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReference {
    pub id: String,
}

/// Configuration for a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub description: String,
    pub expected_output: String,
    /// Tool identifiers, e.g. `"file_read_tool"`
    #[serde(default)]
    pub tools: Vec<String>,
    pub agent: AgentReference,
}

/// Settings for the crew as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewSettings {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub memory: bool,
}

/// A key/value input passed to the crew at kickoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    pub key: String,
    pub value: String,
}

/// Configuration for an entire crew
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewConfig {
    #[serde(default)]
    pub crew: CrewSettings,
    pub agents: Vec<AgentConfig>,
    pub tasks: Vec<TaskConfig>,
    #[serde(default)]
    pub input: Vec<InputConfig>,
}

impl CrewConfig {
    /// Kickoff inputs as a map. Later duplicates win.
    pub fn input_map(&self) -> HashMap<String, String> {
        self.input
            .iter()
            .map(|i| (i.key.clone(), i.value.clone()))
            .collect()
    }

    pub fn agent(&self, id: &str) -> Option<&AgentConfig> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Check agent references and tool names, returning every issue found.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for agent in &self.agents {
            if !seen.insert(agent.id.as_str()) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::DuplicateAgent {
                        agent_id: agent.id.clone(),
                    },
                    message: format!("agent id '{}' is declared more than once", agent.id),
                });
            }
        }

        for (index, task) in self.tasks.iter().enumerate() {
            if self.agent(&task.agent.id).is_none() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::UnknownAgent {
                        task_index: index,
                        agent_id: task.agent.id.clone(),
                    },
                    message: format!(
                        "tasks[{}]: references unknown agent '{}'",
                        index, task.agent.id
                    ),
                });
            }

            for tool in &task.tools {
                if tool.parse::<ToolKind>().is_err() {
                    issues.push(ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::UnknownTool {
                            field: format!("tasks[{}].tools", index),
                            value: tool.clone(),
                        },
                        message: format!("tasks[{}]: unknown tool '{}'", index, tool),
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREW_JSON: &str = r#"{
        "crew": {"verbose": true, "memory": false},
        "agents": [
            {"id": "researcher", "role": "Researcher", "goal": "Find facts",
             "backstory": "Curious", "allow_delegation": false, "verbose": true}
        ],
        "tasks": [
            {"description": "Read the notes", "expected_output": "A summary",
             "tools": ["file_read_tool", "serper_dev_tool"],
             "agent": {"id": "researcher"}}
        ],
        "input": [{"key": "topic", "value": "rust"}]
    }"#;

    #[test]
    fn test_deserialize_crew_config() {
        let config: CrewConfig = serde_json::from_str(CREW_JSON).unwrap();
        assert!(config.crew.verbose);
        assert_eq!(config.agents.len(), 1);
        assert_eq!(config.tasks[0].tools, vec!["file_read_tool", "serper_dev_tool"]);
        assert_eq!(config.input_map().get("topic"), Some(&"rust".to_string()));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_optional_sections_default() {
        let config: CrewConfig = serde_json::from_str(
            r#"{"agents": [], "tasks": []}"#,
        )
        .unwrap();
        assert_eq!(config.crew, CrewSettings::default());
        assert!(config.input.is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config: CrewConfig = serde_json::from_str(CREW_JSON).unwrap();
        config.agents.push(config.agents[0].clone());
        config.tasks[0].agent.id = "writer".to_string();
        config.tasks[0].tools.push("telepathy_tool".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::UnknownTool { value, .. } if value == "telepathy_tool"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::UnknownAgent { task_index: 0, agent_id } if agent_id == "writer"
        )));
    }
}

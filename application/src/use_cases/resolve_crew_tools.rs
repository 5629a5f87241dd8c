//! Resolve crew tools use case
//!
//! Builds the tool instances each task of a [`CrewConfig`] asks for, so the
//! execution engine receives ready-made tools instead of names.

use crate::use_cases::build_tool::ToolFactory;
use humanoid_domain::{CrewConfig, ToolArguments, ToolBuildError, ToolInstance};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while resolving a crew's tools.
#[derive(Error, Debug)]
pub enum ResolveCrewToolsError {
    /// A task is assigned to an agent id that no agent declares.
    #[error("tasks[{task_index}] references unknown agent '{agent_id}'")]
    UnknownAgent { task_index: usize, agent_id: String },

    /// A task names a tool that cannot be built right now.
    #[error("tasks[{task_index}] needs tool '{tool}': {source}")]
    ToolUnavailable {
        task_index: usize,
        tool: String,
        #[source]
        source: ToolBuildError,
    },
}

/// Tools built for one task
#[derive(Debug)]
pub struct ResolvedTaskTools {
    pub task_index: usize,
    pub agent_id: String,
    pub tools: Vec<ToolInstance>,
}

/// Tools built for every task, in task order
#[derive(Debug, Default)]
pub struct ResolvedCrewTools {
    pub tasks: Vec<ResolvedTaskTools>,
}

impl ResolvedCrewTools {
    /// Total number of tool instances across all tasks
    pub fn tool_count(&self) -> usize {
        self.tasks.iter().map(|t| t.tools.len()).sum()
    }
}

/// Use case for turning a crew configuration's tool names into instances.
///
/// Each task's tools are built with an empty argument bag, so tools fall back
/// to their own defaults. The first failure stops resolution.
pub struct ResolveCrewToolsUseCase {
    factory: ToolFactory,
}

impl ResolveCrewToolsUseCase {
    pub fn new(factory: ToolFactory) -> Self {
        Self { factory }
    }

    pub fn execute(&self, config: &CrewConfig) -> Result<ResolvedCrewTools, ResolveCrewToolsError> {
        let empty = ToolArguments::new();
        let mut resolved = ResolvedCrewTools::default();

        for (task_index, task) in config.tasks.iter().enumerate() {
            if config.agent(&task.agent.id).is_none() {
                return Err(ResolveCrewToolsError::UnknownAgent {
                    task_index,
                    agent_id: task.agent.id.clone(),
                });
            }

            let tools = task
                .tools
                .iter()
                .map(|name| {
                    self.factory.build_by_name(name, &empty).map_err(|source| {
                        ResolveCrewToolsError::ToolUnavailable {
                            task_index,
                            tool: name.clone(),
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            debug!(task_index, tools = tools.len(), "Resolved task tools");
            resolved.tasks.push(ResolvedTaskTools {
                task_index,
                agent_id: task.agent.id.clone(),
                tools,
            });
        }

        Ok(resolved)
    }
}

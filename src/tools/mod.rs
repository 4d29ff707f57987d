//! Tool system for the computer-use agent.
//!
//! Every tool has a name, a description the language model reads to decide
//! when to call it, and a JSON schema for its arguments.

mod click;
mod coordinates_click;
mod target;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::desktop::Desktop;

pub use click::{ClickRequest, ClickTool};
pub use coordinates_click::{CoordinatesClickRequest, CoordinatesClickTool};
pub use target::{validate_seconds, validate_target, TargetError};

/// A tool the agent can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name used in function calls.
    fn name(&self) -> &str;

    /// Natural-language description for the model.
    fn description(&self) -> &str;

    /// JSON schema of the arguments object.
    fn parameters_schema(&self) -> Value;

    /// Run the tool.
    ///
    /// Validation and dispatch failures come back as `Ok("Error: ...")`; only
    /// arguments that cannot be decoded at all produce `Err`.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// Short listing of a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

/// Function-calling definition handed to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry of available tools.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a registry with the click tools bound to `desktop`.
    pub fn new(desktop: Arc<dyn Desktop>) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };
        registry.register(Arc::new(ClickTool::new(Arc::clone(&desktop))));
        registry.register(Arc::new(CoordinatesClickTool::new(desktop)));
        registry
    }

    /// Add a tool, replacing any previous tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// List all tools, sorted by name.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        let mut tools: Vec<ToolInfo> = self
            .tools
            .values()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Tool schemas in function-calling format, sorted by name.
    pub fn get_tool_schemas(&self) -> Vec<ToolDefinition> {
        let mut schemas: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                tool_type: "function".to_string(),
                function: FunctionDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters_schema(),
                },
            })
            .collect();
        schemas.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        schemas
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))?;

        tracing::info!("Executing tool: {}", name);
        tool.execute(args).await
    }

    /// Execute a tool by name, folding every failure into an `Error: ...` string.
    pub async fn call(&self, name: &str, args: Value) -> String {
        match self.execute(name, args).await {
            Ok(output) => output,
            Err(e) => format!("Error: {}", e),
        }
    }
}

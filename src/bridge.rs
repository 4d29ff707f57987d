//! JSON-lines bridge between an external agent loop and the tool registry.
//!
//! One request per line on the input, one response per line on the output:
//!
//! ```text
//! {"method":"list_tools"}
//! {"tools":[{"type":"function","function":{...}}, ...]}
//! {"method":"call_tool","name":"click","arguments":{"x":500,"y":300}}
//! {"name":"click","result":"Successfully performed left click at coordinates (500, 300)"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::tools::{ToolDefinition, ToolRegistry};

#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum BridgeRequest {
    ListTools,
    CallTool {
        name: String,
        #[serde(default)]
        arguments: Value,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BridgeResponse {
    Tools { tools: Vec<ToolDefinition> },
    Result { name: String, result: String },
    Error { error: String },
}

/// Answer a single request line.
pub async fn handle_line(registry: &ToolRegistry, line: &str) -> BridgeResponse {
    let request: BridgeRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return BridgeResponse::Error {
                error: format!("Invalid request: {}", e),
            }
        }
    };

    match request {
        BridgeRequest::ListTools => BridgeResponse::Tools {
            tools: registry.get_tool_schemas(),
        },
        BridgeRequest::CallTool { name, arguments } => {
            let result = registry.call(&name, arguments).await;
            tracing::info!("{} -> {}", name, result);
            BridgeResponse::Result { name, result }
        }
    }
}

/// Serve requests from `input` until EOF.
pub async fn serve<R, W>(registry: &ToolRegistry, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(registry, &line).await;
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        output.write_all(encoded.as_bytes()).await?;
        output.flush().await?;
    }

    tracing::debug!("Input closed, stopping bridge");
    Ok(())
}

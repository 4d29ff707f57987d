//! Basic mouse click tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::target::{validate_seconds, validate_target, TargetError};
use super::Tool;
use crate::desktop::Desktop;

/// Arguments of the `click` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ClickRequest {
    pub x: i32,
    pub y: i32,
    #[serde(default = "default_button")]
    pub button: String,
    #[serde(default = "default_clicks")]
    pub clicks: u32,
    #[serde(default)]
    pub interval: f64,
}

pub(crate) fn default_button() -> String {
    "left".to_string()
}

pub(crate) fn default_clicks() -> u32 {
    1
}

impl ClickRequest {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: default_button(),
            clicks: default_clicks(),
            interval: 0.0,
        }
    }
}

/// Click at a location on the screen.
///
/// The screen size is read on every call.
pub struct ClickTool {
    desktop: Arc<dyn Desktop>,
}

impl ClickTool {
    pub fn new(desktop: Arc<dyn Desktop>) -> Self {
        Self { desktop }
    }

    /// Validate and perform the click, always returning a status line.
    pub fn run(&self, req: &ClickRequest) -> String {
        let button = match validate_target(&req.button, req.x, req.y, || self.desktop.screen_size()) {
            Ok(button) => button,
            Err(TargetError::InvalidButton(b)) => {
                return format!("Error: Invalid button '{}'. Use 'left', 'right', or 'middle'.", b)
            }
            Err(TargetError::XOutOfBounds { x, max }) => {
                return format!("Error: X coordinate {} is out of screen bounds (0-{})", x, max)
            }
            Err(TargetError::YOutOfBounds { y, max }) => {
                return format!("Error: Y coordinate {} is out of screen bounds (0-{})", y, max)
            }
            Err(TargetError::Desktop(e)) => return format!("Error performing click: {}", e),
        };
        let interval = match validate_seconds("interval", req.interval) {
            Ok(interval) => interval,
            Err(e) => return format!("Error: {}", e),
        };

        if let Err(e) = self
            .desktop
            .click(req.x, req.y, button, req.clicks, interval)
        {
            tracing::warn!("Click at ({}, {}) failed: {}", req.x, req.y, e);
            return format!("Error performing click: {}", e);
        }

        let click_type = if req.clicks == 2 { "double-click" } else { "click" };
        format!(
            "Successfully performed {} {} at coordinates ({}, {})",
            button, click_type, req.x, req.y
        )
    }
}

#[async_trait]
impl Tool for ClickTool {
    fn name(&self) -> &str {
        "click"
    }

    fn description(&self) -> &str {
        "Click at a specific location on the screen. Use this to interact with UI elements like buttons, links, text fields. Requires X and Y coordinates of the target element. Supports left, right, and middle mouse buttons. Can perform single or double clicks. Examples: click button at (500, 300); right-click context menu at (800, 400); double-click file at (200, 150)."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "x": {
                    "type": "integer",
                    "description": "X coordinate on screen where to click"
                },
                "y": {
                    "type": "integer",
                    "description": "Y coordinate on screen where to click"
                },
                "button": {
                    "type": "string",
                    "enum": ["left", "right", "middle"],
                    "default": "left",
                    "description": "Mouse button to click: 'left', 'right', or 'middle'"
                },
                "clicks": {
                    "type": "integer",
                    "default": 1,
                    "description": "Number of clicks (1 for single click, 2 for double click)"
                },
                "interval": {
                    "type": "number",
                    "default": 0.0,
                    "description": "Interval in seconds between clicks (for multiple clicks)"
                }
            },
            "required": ["x", "y"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let req: ClickRequest = serde_json::from_value(args)
            .map_err(|e| anyhow::anyhow!("Invalid arguments for click: {}", e))?;
        Ok(self.run(&req))
    }
}

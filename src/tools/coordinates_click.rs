//! Coordinate click tool with optional smooth movement.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::click::{default_button, default_clicks};
use super::target::{format_secs, validate_seconds, validate_target, TargetError};
use super::Tool;
use crate::desktop::{Desktop, DesktopError, ScreenBounds};

const FAILSAFE_MESSAGE: &str = "Error: fail-safe triggered (mouse moved to corner)";

/// Arguments of the `coordinates_click` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesClickRequest {
    pub x: i32,
    pub y: i32,
    #[serde(default = "default_button")]
    pub button: String,
    #[serde(default = "default_clicks")]
    pub clicks: u32,
    #[serde(default)]
    pub interval: f64,
    /// Seconds spent moving the cursor to the target; 0 jumps instantly.
    #[serde(default)]
    pub duration: f64,
}

impl CoordinatesClickRequest {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: default_button(),
            clicks: default_clicks(),
            interval: 0.0,
            duration: 0.0,
        }
    }
}

/// Click at exact screen coordinates.
///
/// The screen size is fetched on first use and kept for the lifetime of the
/// tool. A resolution change afterwards is not noticed.
pub struct CoordinatesClickTool {
    desktop: Arc<dyn Desktop>,
    screen: OnceLock<ScreenBounds>,
}

impl CoordinatesClickTool {
    pub fn new(desktop: Arc<dyn Desktop>) -> Self {
        Self {
            desktop,
            screen: OnceLock::new(),
        }
    }

    fn screen_size(&self) -> Result<ScreenBounds, DesktopError> {
        if let Some(bounds) = self.screen.get() {
            return Ok(*bounds);
        }
        let bounds = self.desktop.screen_size()?;
        tracing::debug!("Cached screen size {}x{}", bounds.width, bounds.height);
        Ok(*self.screen.get_or_init(|| bounds))
    }

    /// Validate, optionally glide to the target, and click.
    pub fn run(&self, req: &CoordinatesClickRequest) -> String {
        match self.try_run(req) {
            Ok(message) => message,
            Err(RunError::Target(TargetError::InvalidButton(b))) => {
                format!("Error: Invalid button '{}'. Must be 'left', 'right', or 'middle'.", b)
            }
            Err(RunError::Target(TargetError::Desktop(e))) | Err(RunError::Desktop(e)) => {
                desktop_message(&e)
            }
            Err(RunError::Target(e)) => format!("Error: {}", e),
            Err(RunError::Argument(e)) => format!("Error: {}", e),
        }
    }

    fn try_run(&self, req: &CoordinatesClickRequest) -> Result<String, RunError> {
        let button = validate_target(&req.button, req.x, req.y, || self.screen_size())
            .map_err(RunError::Target)?;
        let interval = validate_seconds("interval", req.interval).map_err(RunError::Argument)?;
        let duration = validate_seconds("duration", req.duration).map_err(RunError::Argument)?;

        if duration > Duration::ZERO {
            self.desktop
                .move_to(req.x, req.y, duration)
                .map_err(RunError::Desktop)?;
        }

        self.desktop
            .click(req.x, req.y, button, req.clicks, interval)
            .map_err(RunError::Desktop)?;

        let click_type = if req.clicks == 2 { "double-click" } else { "click" };
        let movement = if duration > Duration::ZERO {
            format!(" (moved in {}s)", format_secs(req.duration))
        } else {
            String::new()
        };
        Ok(format!(
            "✓ {} {} at ({}, {}){}",
            button.title(),
            click_type,
            req.x,
            req.y,
            movement
        ))
    }
}

enum RunError {
    Target(TargetError),
    Argument(String),
    Desktop(DesktopError),
}

fn desktop_message(e: &DesktopError) -> String {
    match e {
        DesktopError::FailSafe => FAILSAFE_MESSAGE.to_string(),
        other => {
            tracing::warn!("Coordinate click failed: {}", other);
            format!("Error: {}", other)
        }
    }
}

#[async_trait]
impl Tool for CoordinatesClickTool {
    fn name(&self) -> &str {
        "coordinates_click"
    }

    fn description(&self) -> &str {
        "Click at exact screen coordinates with advanced options: precise coordinate targeting, left/right/middle button support, single or double-click, optional smooth mouse movement, and screen bounds validation."
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
                    "description": "Mouse button: 'left', 'right', or 'middle'"
                },
                "clicks": {
                    "type": "integer",
                    "default": 1,
                    "description": "Number of clicks (1=single, 2=double)"
                },
                "interval": {
                    "type": "number",
                    "default": 0.0,
                    "description": "Interval between clicks in seconds"
                },
                "duration": {
                    "type": "number",
                    "default": 0.0,
                    "description": "Duration to move mouse to coordinates (0=instant)"
                }
            },
            "required": ["x", "y"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let req: CoordinatesClickRequest = serde_json::from_value(args)
            .map_err(|e| anyhow::anyhow!("Invalid arguments for coordinates_click: {}", e))?;
        Ok(self.run(&req))
    }
}

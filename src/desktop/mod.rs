//! Desktop automation layer.
//!
//! The tools never talk to the operating system directly. They go through the
//! [`Desktop`] trait so the input backend can be swapped (the `enigo` backend in
//! production, a recording fake in tests).

mod native;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use native::EnigoDesktop;

/// Moves lasting this long or less are performed instantly.
pub const MINIMUM_DURATION: Duration = Duration::from_millis(100);

/// Smallest sleep between two tween steps.
pub const MINIMUM_SLEEP: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum DesktopError {
    /// The cursor was parked in a screen corner, aborting the action.
    #[error("fail-safe triggered (mouse moved to corner)")]
    FailSafe,

    #[error("could not connect to the display: {0}")]
    Connection(String),

    #[error("input simulation failed: {0}")]
    Input(String),
}

/// Size of the primary display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Mouse buttons a tool may press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn as_str(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        }
    }

    /// Name with a leading capital, e.g. `Left`.
    pub fn title(&self) -> &'static str {
        match self {
            MouseButton::Left => "Left",
            MouseButton::Right => "Right",
            MouseButton::Middle => "Middle",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MouseButton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(MouseButton::Left),
            "right" => Ok(MouseButton::Right),
            "middle" => Ok(MouseButton::Middle),
            other => Err(format!("unknown mouse button: {}", other)),
        }
    }
}

/// Backend that performs real cursor movement and clicks.
pub trait Desktop: Send + Sync {
    /// Current size of the primary display.
    fn screen_size(&self) -> Result<ScreenBounds, DesktopError>;

    /// Move the cursor to `(x, y)`, tweening over `duration` when it is long enough.
    fn move_to(&self, x: i32, y: i32, duration: Duration) -> Result<(), DesktopError>;

    /// Move to `(x, y)` and press `button` `clicks` times, `interval` apart.
    fn click(
        &self,
        x: i32,
        y: i32,
        button: MouseButton,
        clicks: u32,
        interval: Duration,
    ) -> Result<(), DesktopError>;
}

/// Whether `pos` is one of the four fail-safe corners of `bounds`.
pub fn is_failsafe_corner(pos: (i32, i32), bounds: ScreenBounds) -> bool {
    let right = bounds.width - 1;
    let bottom = bounds.height - 1;
    pos == (0, 0) || pos == (right, 0) || pos == (0, bottom) || pos == (right, bottom)
}

/// Linear cursor path from `start` to `end` spread over `duration`.
///
/// Returns the points to visit and the sleep between consecutive points. The
/// last point is always `end`.
pub fn tween_path(start: (i32, i32), end: (i32, i32), duration: Duration) -> (Vec<(i32, i32)>, Duration) {
    // Inclusive: a move of exactly MINIMUM_DURATION jumps.
    if duration <= MINIMUM_DURATION {
        return (vec![end], Duration::ZERO);
    }

    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let mut num_steps = dx.unsigned_abs().max(dy.unsigned_abs());
    if num_steps == 0 {
        return (vec![end], Duration::ZERO);
    }

    let mut sleep = duration / num_steps;
    if sleep < MINIMUM_SLEEP {
        num_steps = (duration.as_nanos() / MINIMUM_SLEEP.as_nanos()) as u32;
        sleep = duration / num_steps;
    }

    let mut points: Vec<(i32, i32)> = (0..num_steps)
        .map(|n| {
            let t = f64::from(n) / f64::from(num_steps);
            (
                start.0 + (f64::from(dx) * t).round() as i32,
                start.1 + (f64::from(dy) * t).round() as i32,
            )
        })
        .collect();
    points.push(end);

    (points, sleep)
}

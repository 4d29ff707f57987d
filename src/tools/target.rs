//! Validation shared by the click tools.

use std::time::Duration;

use thiserror::Error;

use crate::desktop::{DesktopError, MouseButton, ScreenBounds};

/// Why a click target was rejected.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("Invalid button '{0}'")]
    InvalidButton(String),

    #[error("X coordinate {x} out of bounds (0-{max})")]
    XOutOfBounds { x: i32, max: i32 },

    #[error("Y coordinate {y} out of bounds (0-{max})")]
    YOutOfBounds { y: i32, max: i32 },

    /// The screen size could not be read.
    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

/// Check the button name, then both coordinates against the screen.
///
/// `screen` is only consulted once the button is known to be valid, so a bad
/// button never reaches the desktop layer.
pub fn validate_target<F>(button: &str, x: i32, y: i32, screen: F) -> Result<MouseButton, TargetError>
where
    F: FnOnce() -> Result<ScreenBounds, DesktopError>,
{
    let button: MouseButton = button
        .parse()
        .map_err(|_| TargetError::InvalidButton(button.to_string()))?;

    let bounds = screen()?;
    if !(0..=bounds.width).contains(&x) {
        return Err(TargetError::XOutOfBounds { x, max: bounds.width });
    }
    if !(0..=bounds.height).contains(&y) {
        return Err(TargetError::YOutOfBounds { y, max: bounds.height });
    }

    Ok(button)
}

/// Convert a seconds argument into a `Duration`, rejecting negatives, NaN and
/// values too large for a `Duration`.
pub fn validate_seconds(name: &str, secs: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("{} must be a finite, non-negative number of seconds", name))
}

/// Render seconds the way a float literal reads: `0.5`, `2.0`.
///
/// Plain decimal notation only; tiny or huge values are written out in full
/// (`0.00001`) rather than in exponent form.
pub(crate) fn format_secs(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{:.1}", secs)
    } else {
        format!("{}", secs)
    }
}

//! `enigo`-backed desktop implementation.

use std::thread;
use std::time::Duration;

use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

use super::{is_failsafe_corner, tween_path, Desktop, DesktopError, MouseButton, ScreenBounds};
use crate::config::Config;

/// Drives the real cursor through `enigo`.
///
/// A fresh `Enigo` connection is opened per action, so the struct itself holds
/// only configuration and can be shared freely between tools.
pub struct EnigoDesktop {
    config: Config,
}

impl EnigoDesktop {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn connect(&self) -> Result<Enigo, DesktopError> {
        Enigo::new(&Settings::default()).map_err(|e| DesktopError::Connection(e.to_string()))
    }

    fn pause(&self) {
        if !self.config.action_pause.is_zero() {
            thread::sleep(self.config.action_pause);
        }
    }
}

impl Desktop for EnigoDesktop {
    fn screen_size(&self) -> Result<ScreenBounds, DesktopError> {
        display_bounds(&self.connect()?)
    }

    fn move_to(&self, x: i32, y: i32, duration: Duration) -> Result<(), DesktopError> {
        let mut enigo = self.connect()?;
        let bounds = display_bounds(&enigo)?;
        tracing::debug!("Moving cursor to ({}, {}) over {:?}", x, y, duration);

        glide(&mut enigo, bounds, (x, y), duration, self.config.failsafe)?;
        self.pause();
        Ok(())
    }

    fn click(
        &self,
        x: i32,
        y: i32,
        button: MouseButton,
        clicks: u32,
        interval: Duration,
    ) -> Result<(), DesktopError> {
        let mut enigo = self.connect()?;
        let bounds = display_bounds(&enigo)?;
        tracing::debug!("Clicking {} x{} at ({}, {})", button, clicks, x, y);

        glide(&mut enigo, bounds, (x, y), Duration::ZERO, self.config.failsafe)?;
        for i in 0..clicks {
            if i > 0 && !interval.is_zero() {
                thread::sleep(interval);
            }
            enigo
                .button(to_enigo_button(button), Direction::Click)
                .map_err(input_error)?;
        }
        self.pause();
        Ok(())
    }
}

/// The cursor operations a glide needs.
pub(crate) trait Cursor {
    fn position(&self) -> Result<(i32, i32), DesktopError>;

    fn jump_to(&mut self, x: i32, y: i32) -> Result<(), DesktopError>;
}

impl Cursor for Enigo {
    fn position(&self) -> Result<(i32, i32), DesktopError> {
        Mouse::location(self).map_err(input_error)
    }

    fn jump_to(&mut self, x: i32, y: i32) -> Result<(), DesktopError> {
        Mouse::move_mouse(self, x, y, Coordinate::Abs).map_err(input_error)
    }
}

fn check_failsafe<C: Cursor>(cursor: &C, bounds: ScreenBounds) -> Result<(), DesktopError> {
    let pos = cursor.position()?;
    if is_failsafe_corner(pos, bounds) {
        tracing::warn!("Fail-safe triggered: cursor at {:?}", pos);
        return Err(DesktopError::FailSafe);
    }
    Ok(())
}

/// Walk the cursor along the tween path to `target`.
///
/// With `failsafe` set, the position is checked before the first step and
/// before every later step, except right after a step that itself landed on a
/// corner.
pub(crate) fn glide<C: Cursor>(
    cursor: &mut C,
    bounds: ScreenBounds,
    target: (i32, i32),
    duration: Duration,
    failsafe: bool,
) -> Result<(), DesktopError> {
    let start = cursor.position()?;
    let (points, sleep) = tween_path(start, target, duration);

    let mut last: Option<(i32, i32)> = None;
    for (px, py) in points {
        let check = match last {
            Some(prev) => {
                thread::sleep(sleep);
                !is_failsafe_corner(prev, bounds)
            }
            None => true,
        };
        if failsafe && check {
            check_failsafe(cursor, bounds)?;
        }
        cursor.jump_to(px, py)?;
        last = Some((px, py));
    }
    Ok(())
}

fn display_bounds(enigo: &Enigo) -> Result<ScreenBounds, DesktopError> {
    let (width, height) = enigo.main_display().map_err(input_error)?;
    Ok(ScreenBounds::new(width, height))
}

fn to_enigo_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

fn input_error(e: enigo::InputError) -> DesktopError {
    DesktopError::Input(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cursor that records jumps and can be yanked to another spot by the "user".
    struct FakeCursor {
        at: (i32, i32),
        jumps: Vec<(i32, i32)>,
        yank_after: Option<(usize, (i32, i32))>,
    }

    impl FakeCursor {
        fn at(x: i32, y: i32) -> Self {
            Self {
                at: (x, y),
                jumps: Vec::new(),
                yank_after: None,
            }
        }
    }

    impl Cursor for FakeCursor {
        fn position(&self) -> Result<(i32, i32), DesktopError> {
            match self.yank_after {
                Some((n, pos)) if self.jumps.len() >= n => Ok(pos),
                _ => Ok(self.at),
            }
        }

        fn jump_to(&mut self, x: i32, y: i32) -> Result<(), DesktopError> {
            self.at = (x, y);
            self.jumps.push((x, y));
            Ok(())
        }
    }

    const SCREEN: ScreenBounds = ScreenBounds {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn instant_glide_jumps_once() {
        let mut cursor = FakeCursor::at(10, 10);
        glide(&mut cursor, SCREEN, (500, 300), Duration::ZERO, true).expect("glide");
        assert_eq!(cursor.jumps, vec![(500, 300)]);
    }

    #[test]
    fn starting_in_corner_aborts_before_moving() {
        let mut cursor = FakeCursor::at(0, 0);
        let err = glide(&mut cursor, SCREEN, (500, 300), Duration::ZERO, true).unwrap_err();
        assert!(matches!(err, DesktopError::FailSafe));
        assert!(cursor.jumps.is_empty());
    }

    #[test]
    fn disabled_failsafe_ignores_corner() {
        let mut cursor = FakeCursor::at(1919, 1079);
        glide(&mut cursor, SCREEN, (500, 300), Duration::ZERO, false).expect("glide");
        assert_eq!(cursor.jumps, vec![(500, 300)]);
    }

    #[test]
    fn corner_reached_by_tween_is_not_an_abort() {
        // Six one-pixel steps over 300ms pass through (0, 0).
        let mut cursor = FakeCursor::at(3, 0);
        glide(&mut cursor, SCREEN, (-3, 0), Duration::from_millis(300), true).expect("glide");
        assert!(cursor.jumps.contains(&(0, 0)));
        assert_eq!(cursor.jumps.last(), Some(&(-3, 0)));
    }

    #[test]
    fn user_yanking_cursor_to_corner_stops_tween() {
        let mut cursor = FakeCursor::at(100, 100);
        cursor.yank_after = Some((2, (1919, 0)));
        let err = glide(&mut cursor, SCREEN, (104, 100), Duration::from_millis(200), true)
            .unwrap_err();
        assert!(matches!(err, DesktopError::FailSafe));
        assert_eq!(cursor.jumps.len(), 2);
    }
}

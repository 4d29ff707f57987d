//! Recording desktop used by the tool tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::desktop::{Desktop, DesktopError, MouseButton, ScreenBounds};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedClick {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    pub clicks: u32,
    pub interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    FailSafe,
    Input,
}

pub struct FakeDesktop {
    bounds: ScreenBounds,
    screen_lookups: AtomicUsize,
    screen_failures: AtomicUsize,
    moves: Mutex<Vec<(i32, i32, Duration)>>,
    clicks: Mutex<Vec<RecordedClick>>,
    fail_with: Mutex<Option<Failure>>,
}

impl FakeDesktop {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: ScreenBounds::new(width, height),
            screen_lookups: AtomicUsize::new(0),
            screen_failures: AtomicUsize::new(0),
            moves: Mutex::new(Vec::new()),
            clicks: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Make every subsequent move and click fail.
    pub fn fail_with(&self, failure: Failure) {
        *self.fail_with.lock().unwrap() = Some(failure);
    }

    /// Make the next `times` screen size lookups fail.
    pub fn fail_screen(&self, times: usize) {
        self.screen_failures.store(times, Ordering::SeqCst);
    }

    pub fn screen_lookups(&self) -> usize {
        self.screen_lookups.load(Ordering::SeqCst)
    }

    pub fn moves(&self) -> Vec<(i32, i32, Duration)> {
        self.moves.lock().unwrap().clone()
    }

    pub fn clicks(&self) -> Vec<RecordedClick> {
        self.clicks.lock().unwrap().clone()
    }

    fn injected(&self) -> Result<(), DesktopError> {
        match *self.fail_with.lock().unwrap() {
            Some(Failure::FailSafe) => Err(DesktopError::FailSafe),
            Some(Failure::Input) => Err(DesktopError::Input("button stuck".to_string())),
            None => Ok(()),
        }
    }
}

impl Desktop for FakeDesktop {
    fn screen_size(&self) -> Result<ScreenBounds, DesktopError> {
        self.screen_lookups.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .screen_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DesktopError::Connection("no display".to_string()));
        }
        Ok(self.bounds)
    }

    fn move_to(&self, x: i32, y: i32, duration: Duration) -> Result<(), DesktopError> {
        self.injected()?;
        self.moves.lock().unwrap().push((x, y, duration));
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
        self.injected()?;
        self.clicks.lock().unwrap().push(RecordedClick {
            x,
            y,
            button,
            clicks,
            interval,
        });
        Ok(())
    }
}

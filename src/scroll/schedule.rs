use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("couldn't request animation frame: {0}")]
    Frame(String),
    #[error("couldn't set timer: {0}")]
    Timer(String),
}

pub type Callback = Box<dyn FnOnce() + 'static>;

/// Deferred execution on the UI thread.
///
/// Frame callbacks run before the next repaint. A cancelled frame or cleared timer
/// never runs.
pub trait Scheduler {
    type Frame;
    type Timer;

    fn request_frame(&self, callback: Callback) -> Result<Self::Frame, ScheduleError>;
    fn cancel_frame(&self, frame: Self::Frame);
    fn set_timer(&self, delay: Duration, callback: Callback) -> Result<Self::Timer, ScheduleError>;
    fn clear_timer(&self, timer: Self::Timer);
}

//! Cancellable periodic tasks and the dashboard's real-time clock.
//!
//! A task runs on the ambient tokio runtime until its [`TaskHandle`] is
//! cancelled or dropped. The owning view keeps the handle, so tearing the view
//! down also stops the callbacks.

use std::time::Duration;

use chrono::Local;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::error::{Result, StateError};

/// Shortest accepted period; tokio intervals reject a zero period.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Owner of a running periodic task. Dropping it cancels the task.
#[derive(Debug)]
pub struct TaskHandle {
    task: Option<JoinHandle<()>>,
}

impl TaskHandle {
    /// Stop the task. No callback starts after this returns.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("periodic task cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Call `on_tick` now and then once every `period`.
///
/// Ticks missed while the runtime was busy are skipped rather than replayed.
///
/// # Errors
///
/// Returns [`StateError::NoRuntime`] when called outside a tokio runtime.
pub fn every<F>(period: Duration, mut on_tick: F) -> Result<TaskHandle>
where
    F: FnMut() + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| StateError::NoRuntime)?;
    let period = period.max(MIN_PERIOD);
    let task = runtime.spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            on_tick();
        }
    });
    debug!(period_ms = period.as_millis(), "periodic task started");
    Ok(TaskHandle { task: Some(task) })
}

/// Wall-clock display refreshed on a fixed period.
#[derive(Debug)]
pub struct RealTimeClock {
    task: TaskHandle,
}

impl RealTimeClock {
    /// Display format, e.g. `14:05:09`.
    pub const FORMAT: &'static str = "%H:%M:%S";

    /// Start ticking; `on_tick` receives the formatted local time.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Result<Self>
    where
        F: FnMut(String) + Send + 'static,
    {
        let task = every(period, move || {
            on_tick(Local::now().format(Self::FORMAT).to_string());
        })?;
        Ok(Self { task })
    }

    pub fn is_running(&self) -> bool {
        self.task.is_active()
    }

    /// Stop ticking.
    pub fn stop(mut self) {
        self.task.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_requires_a_runtime() {
        let result = every(Duration::from_secs(1), || {});
        assert_eq!(result.err(), Some(StateError::NoRuntime));
    }
}

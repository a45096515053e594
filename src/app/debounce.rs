//! Debounce helper.
//!
//! Each call cancels the pending action and schedules the new one after the
//! quiet period, so a burst of calls runs the last action exactly once. Only
//! the wait is cancellable: once the quiet period has elapsed the action is
//! detached and always runs to completion.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiet period used for list refresh requests.
pub const REFRESH_DEBOUNCE: Duration = Duration::from_millis(200);

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action` after the quiet period, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Ok(mut pending) = self.pending.lock() else {
            return;
        };

        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(action);
        }));
    }

    /// Whether an action is waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.as_ref().is_some_and(|task| !task.is_finished()))
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}

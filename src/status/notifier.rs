//! Status notifier owning the status state.
//!
//! All mutation goes through [`StatusNotifier::report`]. Expiry is tracked in
//! the state itself (`expires_at`) and pushed to the surface by a clear task;
//! each report aborts the previous clear task, so a stale timer never clears a
//! newer message. Both paths render while holding the state lock, so the
//! surface always shows the latest state.

use super::{is_persistent, StatusView, STATUS_CLEAR_DELAY};
use crate::ui::Surface;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Debug, Default)]
struct StatusState {
    message: String,
    is_error: bool,
    expires_at: Option<Instant>,
    generation: u64,
}

impl StatusState {
    fn view(&self, now: Instant) -> StatusView {
        match self.expires_at {
            Some(deadline) if now >= deadline => StatusView::cleared(),
            _ => StatusView::new(self.message.clone(), self.is_error),
        }
    }
}

/// Renders transient or persistent messages into the status region.
pub struct StatusNotifier {
    state: Arc<Mutex<StatusState>>,
    surface: Arc<dyn Surface>,
    clear_after: Duration,
    clear_task: Mutex<Option<JoinHandle<()>>>,
}

impl StatusNotifier {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self::with_clear_delay(surface, STATUS_CLEAR_DELAY)
    }

    pub fn with_clear_delay(surface: Arc<dyn Surface>, clear_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(StatusState::default())),
            surface,
            clear_after,
            clear_task: Mutex::new(None),
        }
    }

    /// Replace the visible message.
    ///
    /// Messages carrying the alert-sent marker stay until replaced; all others
    /// are cleared after the configured delay.
    pub fn report(&self, message: impl Into<String>, is_error: bool) {
        let message = message.into();
        let now = Instant::now();
        let expires_at = (!is_persistent(&message)).then(|| now + self.clear_after);

        // Rendered under the state lock so the surface never lags the state
        let generation = {
            let Ok(mut state) = self.state.lock() else {
                return;
            };
            state.message = message;
            state.is_error = is_error;
            state.expires_at = expires_at;
            state.generation += 1;

            let view = state.view(now);
            tracing::debug!(is_error, persistent = expires_at.is_none(), "status: {}", view.message);
            self.surface.render_status(&view);
            state.generation
        };

        self.reschedule_clear(generation, expires_at);
    }

    /// The status as it should currently appear.
    pub fn current(&self) -> StatusView {
        self.state
            .lock()
            .map(|state| state.view(Instant::now()))
            .unwrap_or_else(|_| StatusView::cleared())
    }

    fn reschedule_clear(&self, generation: u64, expires_at: Option<Instant>) {
        let Ok(mut clear_task) = self.clear_task.lock() else {
            return;
        };

        // A newer report owns the timer
        let current = self.state.lock().map(|state| state.generation).ok();
        if current != Some(generation) {
            return;
        }

        if let Some(previous) = clear_task.take() {
            previous.abort();
        }

        let Some(deadline) = expires_at else {
            return;
        };

        // Without a runtime the expiry is still honoured lazily by `current()`
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let state = self.state.clone();
        let surface = self.surface.clone();

        *clear_task = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let Ok(mut state) = state.lock() else {
                return;
            };
            if state.generation != generation {
                return;
            }
            state.message.clear();
            state.is_error = false;
            state.expires_at = None;
            surface.render_status(&StatusView::cleared());
        }));
    }
}

impl Drop for StatusNotifier {
    fn drop(&mut self) {
        if let Ok(mut clear_task) = self.clear_task.lock() {
            if let Some(task) = clear_task.take() {
                task.abort();
            }
        }
    }
}

//! Advisory loading flag.
//!
//! Holding a [`LoadingGuard`] keeps the surface's input affordances disabled.
//! The flag counts holders, so a refresh nested inside another action does not
//! re-enable the surface early. Dropping the guard on any exit path releases it.

use super::Surface;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared loading state for one surface.
#[derive(Clone)]
pub struct LoadingFlag {
    holders: Arc<AtomicUsize>,
    surface: Arc<dyn Surface>,
}

impl LoadingFlag {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            holders: Arc::new(AtomicUsize::new(0)),
            surface,
        }
    }

    /// Disable the affordances until the returned guard is dropped.
    pub fn hold(&self) -> LoadingGuard<'_> {
        if self.holders.fetch_add(1, Ordering::SeqCst) == 0 {
            self.surface.set_loading(true);
        }
        LoadingGuard { flag: self }
    }

    /// Whether any action currently holds the flag.
    pub fn is_loading(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Releases its hold on the [`LoadingFlag`] when dropped.
#[must_use = "the loading flag is released as soon as the guard is dropped"]
pub struct LoadingGuard<'a> {
    flag: &'a LoadingFlag,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.flag.holders.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.flag.surface.set_loading(false);
        }
    }
}

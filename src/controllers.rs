//! Controllers for observing the tab switcher from external code.
//!
//! The switcher is the only writer of the selection; any number of readers
//! can poll [`SelectionController::current`] or subscribe to updates.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared store for the currently selected tab value.
#[derive(Clone, Default)]
pub struct SelectionController {
    pub(crate) inner: Arc<Mutex<SelectionInner>>,
}

#[derive(Default)]
pub(crate) struct SelectionInner {
    pub(crate) current: Option<String>,
    pub(crate) listeners: Vec<Sender<String>>,
}

impl SelectionController {
    /// Create a fresh controller with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller seeded with an initial value, e.g. the first
    /// configured tab.
    pub fn with_initial(value: impl Into<String>) -> Self {
        let ctrl = Self::new();
        ctrl.inner.lock().current = Some(value.into());
        ctrl
    }

    /// Last published value (if any).
    pub fn current(&self) -> Option<String> {
        self.inner.lock().current.clone()
    }

    /// Replace the selection and broadcast it. Listeners whose receiver was
    /// dropped are removed.
    pub fn publish(&self, value: &str) {
        let mut inner = self.inner.lock();
        inner.current = Some(value.to_string());
        inner.listeners.retain(|s| s.send(value.to_string()).is_ok());
    }

    /// Subscribe to selection updates. The receiver gets every value published
    /// after this call.
    pub fn subscribe(&self) -> Receiver<String> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().listeners.push(tx);
        rx
    }

    /// Number of live subscribers as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SelectionController")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

//! Tracker capability and the slot it appears in.

use std::sync::{Arc, RwLock};

use serde_json::Value;

/// Event data attached to tracker calls: a JSON object map.
pub type EventData = serde_json::Map<String, Value>;

/// The externally injected tracker capability.
///
/// Implemented by whatever bridges to the remote analytics service once
/// its script has loaded; satisfied by a recording double in tests. A
/// nameless `track` call records a page view.
pub trait Tracker: Send + Sync + std::fmt::Debug {
    /// Records an event. `None` for `name` means a page view.
    fn track(&self, name: Option<&str>, data: Option<&EventData>);

    /// Attaches identity data to the current session.
    fn identify(&self, data: &EventData);
}

/// Shared cell the tracker appears in asynchronously.
///
/// Starts empty; the host installs the tracker exactly once when the
/// remote script finishes loading. The dispatcher polls it through
/// [`Dispatcher::wait_for_tracker`](crate::Dispatcher::wait_for_tracker).
#[derive(Clone, Default)]
pub struct TrackerSlot {
    inner: Arc<RwLock<Option<Arc<dyn Tracker>>>>,
}

impl TrackerSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the tracker. Later installs replace the earlier one.
    pub fn install(&self, tracker: Arc<dyn Tracker>) {
        // Lock poisoning only happens if an installer panicked mid-write;
        // overwrite the value regardless.
        match self.inner.write() {
            Ok(mut slot) => *slot = Some(tracker),
            Err(poisoned) => *poisoned.into_inner() = Some(tracker),
        }
    }

    /// Returns the tracker when present.
    pub fn get(&self) -> Option<Arc<dyn Tracker>> {
        match self.inner.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl std::fmt::Debug for TrackerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let installed = self.get().is_some();
        f.debug_struct("TrackerSlot")
            .field("installed", &installed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NullTracker;

    impl Tracker for NullTracker {
        fn track(&self, _name: Option<&str>, _data: Option<&EventData>) {}
        fn identify(&self, _data: &EventData) {}
    }

    #[test]
    fn test_slot_starts_empty() {
        assert!(TrackerSlot::new().get().is_none());
    }

    #[test]
    fn test_install_makes_tracker_visible_through_clones() {
        let slot = TrackerSlot::new();
        let view = slot.clone();
        slot.install(Arc::new(NullTracker));
        assert!(view.get().is_some());
    }
}

//! Analytics event seam.
//!
//! User interactions worth measuring are reported as category/action/label
//! triples through an [`EventSink`]. Tracking is fire-and-forget: sinks
//! never fail and never block the command that fired the event. The
//! default sink discards everything, so running without analytics costs
//! nothing.

use std::cell::RefCell;

/// One tracked interaction, e.g. `("Tutorias", "Contactar_Tutor", "Ana García")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub category: String,
    pub action: String,
    pub label: String,
}

/// Receiver for analytics events.
///
/// Implementations take `&self` so sinks can be shared freely; any
/// buffering they need is their own concern.
pub trait EventSink {
    fn track(&self, category: &str, action: &str, label: &str);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn track(&self, category: &str, action: &str, label: &str) {
        (**self).track(category, action, label)
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn track(&self, _category: &str, _action: &str, _label: &str) {}
}

/// In-memory sink for testing.
///
/// Uses `RefCell` for interior mutability since the app is
/// single-threaded. This keeps `track` at `&self` without locking.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything tracked so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingSink {
    fn track(&self, category: &str, action: &str, label: &str) {
        self.events.borrow_mut().push(Event {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        });
    }
}

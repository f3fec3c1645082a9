//! Pointer gesture events
//!
//! The gesture recognizer delivers one stream per pointer: a down event, any
//! number of incremental moves, then either an up or a cancel. Moves carry the
//! change since the previous event, not the offset from the down position.

use crate::geometry::{Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed at a position in window coordinates
    PointerDown(Point),
    /// Incremental movement since the previous event
    PointerMove(Vec2),
    PointerUp,
    /// The platform took the gesture away (e.g. a system gesture)
    PointerCancel,
}

impl GestureEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::PointerDown(_) => "pointer_down",
            GestureEvent::PointerMove(_) => "pointer_move",
            GestureEvent::PointerUp => "pointer_up",
            GestureEvent::PointerCancel => "pointer_cancel",
        }
    }
}

/// Whether a handler consumed an event
///
/// A consumed event must not be offered to parent scroll or drag handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

impl EventOutcome {
    pub fn is_consumed(self) -> bool {
        self == EventOutcome::Consumed
    }
}

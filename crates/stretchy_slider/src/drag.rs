//! Drag-to-value mapping
//!
//! ```text
//!            PointerDown (inside handle)
//!   Idle ───────────────────────────────▶ Dragging ──┐
//!    ▲                                       │       │ PointerMove: apply(delta)
//!    └──────── PointerUp / PointerCancel ────┘ ◀─────┘
//! ```
//!
//! Each move sample is applied immediately. Releasing or cancelling keeps
//! whatever was already applied.

use stretchy_core::{EventOutcome, GestureEvent, Rect, Vec2};

use crate::value::ValueStore;

/// Pointer travel per value step, in dp
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Debug)]
pub struct DragToDeltaMapper {
    phase: DragPhase,
    sensitivity: f32,
}

impl DragToDeltaMapper {
    /// `sensitivity` is the pointer travel that moves the value by one step
    pub fn new(sensitivity: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            sensitivity,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Value delta for one movement sample
    ///
    /// Screen y grows downward, so upward movement yields a positive delta.
    pub fn delta_for(&self, sample: Vec2) -> i32 {
        let steps = (sample.y / self.sensitivity).round();
        // float-to-int casts saturate, and NaN becomes 0
        (-steps) as i32
    }

    /// Feed one gesture event; `handle` is the handle's current hit region
    pub fn handle(
        &mut self,
        event: GestureEvent,
        handle: Rect,
        store: &mut ValueStore,
    ) -> EventOutcome {
        match (self.phase, event) {
            (DragPhase::Idle, GestureEvent::PointerDown(position)) => {
                if !handle.contains(position) {
                    return EventOutcome::Ignored;
                }
                tracing::debug!(x = position.x, y = position.y, value = store.get(), "drag start");
                self.phase = DragPhase::Dragging;
                EventOutcome::Consumed
            }
            (DragPhase::Idle, _) => EventOutcome::Ignored,

            (DragPhase::Dragging, GestureEvent::PointerMove(sample)) => {
                let delta = self.delta_for(sample);
                let value = store.apply(delta);
                tracing::trace!(dy = sample.y, delta, value, "drag sample");
                EventOutcome::Consumed
            }
            (DragPhase::Dragging, GestureEvent::PointerDown(_)) => {
                tracing::warn!("pointer down while already dragging, ignoring");
                EventOutcome::Consumed
            }
            (DragPhase::Dragging, GestureEvent::PointerUp | GestureEvent::PointerCancel) => {
                tracing::debug!(event = event.name(), value = store.get(), "drag end");
                self.phase = DragPhase::Idle;
                EventOutcome::Consumed
            }
        }
    }
}

impl Default for DragToDeltaMapper {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SENSITIVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stretchy_core::Point;

    const HANDLE: Rect = Rect::new(10.0, 150.0, 40.0, 40.0);

    fn inside() -> Point {
        HANDLE.center()
    }

    #[test]
    fn test_delta_rounding_and_sign() {
        let mapper = DragToDeltaMapper::default();
        assert_eq!(mapper.delta_for(Vec2::new(0.0, -25.0)), 5);
        assert_eq!(mapper.delta_for(Vec2::new(0.0, 100.0)), -20);
        assert_eq!(mapper.delta_for(Vec2::new(0.0, -2.0)), 0);
        assert_eq!(mapper.delta_for(Vec2::new(0.0, -3.0)), 1);
        assert_eq!(mapper.delta_for(Vec2::new(0.0, 12.4)), -2);
        // Horizontal movement never changes the value
        assert_eq!(mapper.delta_for(Vec2::new(80.0, 0.0)), 0);
    }

    #[test]
    fn test_delta_saturates_on_huge_samples() {
        let mapper = DragToDeltaMapper::default();
        assert_eq!(mapper.delta_for(Vec2::new(0.0, f32::MAX)), i32::MIN);
        assert_eq!(mapper.delta_for(Vec2::new(0.0, f32::NAN)), 0);
    }

    #[test]
    fn test_press_outside_handle_is_ignored() {
        let mut mapper = DragToDeltaMapper::default();
        let mut store = ValueStore::new(50);

        let outcome = mapper.handle(
            GestureEvent::PointerDown(Point::new(0.0, 0.0)),
            HANDLE,
            &mut store,
        );
        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(mapper.phase(), DragPhase::Idle);

        let outcome = mapper.handle(
            GestureEvent::PointerMove(Vec2::new(0.0, -50.0)),
            HANDLE,
            &mut store,
        );
        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(store.get(), 50);
    }

    #[test]
    fn test_drag_applies_each_sample() {
        let mut mapper = DragToDeltaMapper::default();
        let mut store = ValueStore::new(50);

        assert!(mapper
            .handle(GestureEvent::PointerDown(inside()), HANDLE, &mut store)
            .is_consumed());
        assert!(mapper.is_dragging());

        let mut values = Vec::new();
        for dy in [-25.0, -25.0, -50.0] {
            let outcome = mapper.handle(
                GestureEvent::PointerMove(Vec2::new(0.0, dy)),
                HANDLE,
                &mut store,
            );
            assert!(outcome.is_consumed());
            values.push(store.get());
        }
        assert_eq!(values, vec![55, 60, 70]);

        assert!(mapper
            .handle(GestureEvent::PointerUp, HANDLE, &mut store)
            .is_consumed());
        assert_eq!(mapper.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_cancel_keeps_applied_deltas() {
        let mut mapper = DragToDeltaMapper::default();
        let mut store = ValueStore::new(50);

        mapper.handle(GestureEvent::PointerDown(inside()), HANDLE, &mut store);
        mapper.handle(
            GestureEvent::PointerMove(Vec2::new(0.0, 50.0)),
            HANDLE,
            &mut store,
        );
        mapper.handle(GestureEvent::PointerCancel, HANDLE, &mut store);

        assert_eq!(mapper.phase(), DragPhase::Idle);
        assert_eq!(store.get(), 40);
    }

    #[test]
    fn test_moves_after_release_are_ignored() {
        let mut mapper = DragToDeltaMapper::default();
        let mut store = ValueStore::new(50);

        mapper.handle(GestureEvent::PointerDown(inside()), HANDLE, &mut store);
        mapper.handle(GestureEvent::PointerUp, HANDLE, &mut store);
        let outcome = mapper.handle(
            GestureEvent::PointerMove(Vec2::new(0.0, -50.0)),
            HANDLE,
            &mut store,
        );

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(store.get(), 50);
    }

    #[test]
    fn test_sample_may_leave_handle_while_dragging() {
        let mut mapper = DragToDeltaMapper::default();
        let mut store = ValueStore::new(0);

        mapper.handle(GestureEvent::PointerDown(inside()), HANDLE, &mut store);
        // Far outside the handle, still part of the same gesture
        mapper.handle(
            GestureEvent::PointerMove(Vec2::new(0.0, -400.0)),
            HANDLE,
            &mut store,
        );
        assert_eq!(store.get(), 80);
    }

    #[test]
    fn test_custom_sensitivity() {
        let mapper = DragToDeltaMapper::new(2.0);
        assert_eq!(mapper.sensitivity(), 2.0);
        assert_eq!(mapper.delta_for(Vec2::new(0.0, -10.0)), 5);
    }
}

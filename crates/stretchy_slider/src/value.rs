//! Bounded slider value
//!
//! The value is a reactive signal. Every [`ValueStore::apply`] writes it, even
//! when the delta is zero, so subscribers see one notification per applied
//! sample.

use std::fmt;

use stretchy_core::{Derived, Effect, ReactiveGraph, Signal};

pub const MIN_VALUE: i32 = 0;
pub const MAX_VALUE: i32 = 100;
pub const DEFAULT_VALUE: i32 = 50;

/// Single source of truth for one slider's value
pub struct ValueStore {
    graph: ReactiveGraph,
    value: Signal<i32>,
}

impl ValueStore {
    /// Store `initial` as-is
    ///
    /// No range check happens here; the first [`apply`](Self::apply) brings an
    /// out-of-range value back into bounds.
    /// [`SliderConfig::validate`](crate::SliderConfig::validate) rejects such
    /// values before a slider is built.
    pub fn new(initial: i32) -> Self {
        let mut graph = ReactiveGraph::new();
        let value = graph.create_signal(initial);
        Self { graph, value }
    }

    pub fn get(&self) -> i32 {
        self.graph.get_untracked(self.value).unwrap_or(DEFAULT_VALUE)
    }

    /// Add `delta`, saturating at the bounds, and return the new value
    pub fn apply(&mut self, delta: i32) -> i32 {
        let current = self.get();
        let next = current.saturating_add(delta).clamp(MIN_VALUE, MAX_VALUE);
        tracing::trace!(current, delta, next, "apply");
        self.graph.set(self.value, next);
        next
    }

    /// Call `observer` with the current value now and after every `apply`
    pub fn subscribe<F>(&mut self, mut observer: F) -> Effect
    where
        F: FnMut(i32) + 'static,
    {
        let value = self.value;
        self.graph
            .create_effect(move |g| observer(g.get(value).unwrap_or(DEFAULT_VALUE)))
    }

    pub fn unsubscribe(&mut self, effect: Effect) {
        self.graph.dispose_effect(effect);
    }

    /// A value computed from the slider value, cached until the next `apply`
    pub fn derive<T, F>(&mut self, compute: F) -> Derived<T>
    where
        T: Clone + 'static,
        F: Fn(i32) -> T + 'static,
    {
        let value = self.value;
        self.graph
            .create_derived(move |g| compute(g.get(value).unwrap_or(DEFAULT_VALUE)))
    }

    /// Read a value created by [`derive`](Self::derive) on this store
    pub fn read<T: Clone + 'static>(&mut self, derived: Derived<T>) -> Option<T> {
        self.graph.get_derived(derived)
    }
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE)
    }
}

impl fmt::Debug for ValueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStore")
            .field("value", &self.get())
            .finish()
    }
}

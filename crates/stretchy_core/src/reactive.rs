//! Fine-grained reactive signal system
//!
//! A push-pull hybrid scoped to a single widget tree on the UI thread:
//! - Signals push invalidation notifications to subscribers
//! - Derived values pull (lazily compute) their values when accessed
//! - Effects re-run after every write to a signal they read
//!
//! Dependencies are recorded automatically: every signal read through
//! [`ReactiveGraph::get`] while a derived value or an effect is running
//! becomes one of its dependencies.
//!
//! Writes are never deduplicated. Setting a signal to the value it already
//! holds still notifies its subscribers.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

new_key_type! {
    /// Unique identifier for a signal
    struct SignalId;
    /// Unique identifier for a derived/computed value
    struct DerivedId;
    /// Unique identifier for an effect
    struct EffectId;
}

/// Subscriber types that can react to signal changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubscriberId {
    Derived(DerivedId),
    Effect(EffectId),
}

type DepList = SmallVec<[SignalId; 4]>;

/// A reactive signal handle (cheap to copy)
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.id).finish()
    }
}

/// A derived/computed value handle
pub struct Derived<T> {
    id: DerivedId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Derived<T> {}

impl<T> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Derived").field(&self.id).finish()
    }
}

/// An effect handle
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    id: EffectId,
}

struct SignalNode {
    value: Box<dyn Any>,
    subscribers: SmallVec<[SubscriberId; 4]>,
}

type ComputeFn = Rc<dyn Fn(&ReactiveGraph) -> Box<dyn Any>>;

struct DerivedNode {
    value: Option<Box<dyn Any>>,
    compute: ComputeFn,
    dependencies: DepList,
    dirty: Cell<bool>,
}

struct EffectNode {
    /// Taken out while the effect runs so the graph can be borrowed
    run: Option<Box<dyn FnMut(&ReactiveGraph)>>,
    dependencies: DepList,
    dirty: Cell<bool>,
}

/// The reactive graph that manages all signals, derived values, and effects
///
/// One graph per widget instance; graphs are not shared across threads.
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    derived: SlotMap<DerivedId, DerivedNode>,
    effects: SlotMap<EffectId, EffectNode>,
    pending_effects: RefCell<VecDeque<EffectId>>,
    /// Signals read by the derived value or effect currently running
    tracking: RefCell<Option<DepList>>,
}

impl ReactiveGraph {
    /// Create a new reactive graph
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            derived: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            pending_effects: RefCell::new(VecDeque::new()),
            tracking: RefCell::new(None),
        }
    }

    // =========================================================================
    // SIGNALS
    // =========================================================================

    /// Create a new signal with an initial value
    pub fn create_signal<T: 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            subscribers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: PhantomData,
        }
    }

    /// Get the current value of a signal
    ///
    /// If called within a tracking context (effect or derived), this signal
    /// will be recorded as a dependency.
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(ref mut deps) = *self.tracking.borrow_mut() {
            if !deps.contains(&signal.id) {
                deps.push(signal.id);
            }
        }
        self.get_untracked(signal)
    }

    /// Get the current value without tracking as a dependency
    pub fn get_untracked<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal, triggering reactive updates
    pub fn set<T: 'static>(&mut self, signal: Signal<T>, value: T) {
        let Some(node) = self.signals.get_mut(signal.id) else {
            tracing::warn!(?signal, "set on a disposed signal");
            return;
        };
        node.value = Box::new(value);

        let subscribers = node.subscribers.clone();
        for sub in subscribers {
            self.mark_dirty(sub);
        }
        self.flush_effects();
    }

    // =========================================================================
    // DERIVED VALUES
    // =========================================================================

    /// Create a derived (computed) value
    pub fn create_derived<T, F>(&mut self, compute: F) -> Derived<T>
    where
        T: Clone + 'static,
        F: Fn(&ReactiveGraph) -> T + 'static,
    {
        let compute: ComputeFn = Rc::new(move |graph: &ReactiveGraph| -> Box<dyn Any> {
            Box::new(compute(graph))
        });

        let id = self.derived.insert(DerivedNode {
            value: None,
            compute,
            dependencies: SmallVec::new(),
            dirty: Cell::new(true),
        });

        Derived {
            id,
            _marker: PhantomData,
        }
    }

    /// Get the value of a derived, computing it if a dependency changed
    pub fn get_derived<T: Clone + 'static>(&mut self, derived: Derived<T>) -> Option<T> {
        let node = self.derived.get(derived.id)?;

        if !node.dirty.get() {
            if let Some(ref cached) = node.value {
                return cached.downcast_ref::<T>().cloned();
            }
        }

        let compute = Rc::clone(&node.compute);
        node.dirty.set(false);

        let (value, deps) = self.tracked(|graph| (*compute)(graph));
        let old_deps = std::mem::take(&mut self.derived.get_mut(derived.id)?.dependencies);
        self.resubscribe(SubscriberId::Derived(derived.id), &old_deps, &deps);

        let node = self.derived.get_mut(derived.id)?;
        node.dependencies = deps;
        let result = value.downcast_ref::<T>().cloned();
        node.value = Some(value);
        result
    }

    // =========================================================================
    // EFFECTS
    // =========================================================================

    /// Create an effect that runs now and again whenever its dependencies change
    pub fn create_effect<F>(&mut self, run: F) -> Effect
    where
        F: FnMut(&ReactiveGraph) + 'static,
    {
        let id = self.effects.insert(EffectNode {
            run: Some(Box::new(run)),
            dependencies: SmallVec::new(),
            dirty: Cell::new(true),
        });

        self.pending_effects.borrow_mut().push_back(id);
        self.flush_effects();

        Effect { id }
    }

    /// Dispose of an effect, removing it from the graph
    pub fn dispose_effect(&mut self, effect: Effect) {
        if let Some(node) = self.effects.remove(effect.id) {
            for &dep_id in &node.dependencies {
                if let Some(sig) = self.signals.get_mut(dep_id) {
                    sig.subscribers
                        .retain(|s| *s != SubscriberId::Effect(effect.id));
                }
            }
        }
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Run `f` while recording which signals it reads
    fn tracked<R>(&self, f: impl FnOnce(&Self) -> R) -> (R, DepList) {
        let outer = self.tracking.replace(Some(SmallVec::new()));
        let result = f(self);
        let deps = self.tracking.replace(outer).unwrap_or_default();
        (result, deps)
    }

    fn resubscribe(&mut self, sub: SubscriberId, old: &[SignalId], new: &[SignalId]) {
        for &dep_id in old {
            if let Some(sig) = self.signals.get_mut(dep_id) {
                sig.subscribers.retain(|s| *s != sub);
            }
        }
        for &dep_id in new {
            if let Some(sig) = self.signals.get_mut(dep_id) {
                if !sig.subscribers.contains(&sub) {
                    sig.subscribers.push(sub);
                }
            }
        }
    }

    fn mark_dirty(&self, sub: SubscriberId) {
        match sub {
            SubscriberId::Derived(id) => {
                if let Some(node) = self.derived.get(id) {
                    node.dirty.set(true);
                }
            }
            SubscriberId::Effect(id) => {
                if let Some(node) = self.effects.get(id) {
                    if !node.dirty.get() {
                        node.dirty.set(true);
                        self.pending_effects.borrow_mut().push_back(id);
                    }
                }
            }
        }
    }

    fn flush_effects(&mut self) {
        loop {
            let next = self.pending_effects.borrow_mut().pop_front();
            match next {
                Some(effect_id) => self.run_effect(effect_id),
                None => break,
            }
        }
    }

    fn run_effect(&mut self, effect_id: EffectId) {
        let Some(node) = self.effects.get_mut(effect_id) else {
            return;
        };
        if !node.dirty.get() {
            return;
        }
        node.dirty.set(false);
        let Some(mut run) = node.run.take() else {
            return;
        };

        let ((), deps) = self.tracked(|graph| run(graph));

        let Some(node) = self.effects.get_mut(effect_id) else {
            return;
        };
        node.run = Some(run);
        let old_deps = std::mem::take(&mut node.dependencies);
        self.resubscribe(SubscriberId::Effect(effect_id), &old_deps, &deps);
        if let Some(node) = self.effects.get_mut(effect_id) {
            node.dependencies = deps;
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DIRTY FLAG - re-render requests
// =============================================================================

/// Shared flag an effect raises to request a redraw
///
/// Clones share the same flag. The renderer takes the request once per frame.
#[derive(Clone, Debug, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a redraw
    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Whether a redraw is pending, without clearing it
    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    /// Consume a pending redraw request
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

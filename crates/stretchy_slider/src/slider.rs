//! One slider instance
//!
//! A [`Slider`] owns everything it mutates: its value, its drag state and its
//! two animated scales. Several sliders on one screen share nothing but
//! configuration values.
//!
//! Per frame the host:
//! 1. forwards pointer events with [`Slider::handle_event`]
//! 2. advances the springs with [`Slider::tick`]
//! 3. redraws from [`Slider::layout`] if [`Slider::take_redraw_request`] says so

use stretchy_animation::AnimatedFloat;
use stretchy_core::{
    Derived, DirtyFlag, EventOutcome, GestureEvent, Point, VerticalGradient,
};

use crate::config::SliderConfig;
use crate::drag::{DragPhase, DragToDeltaMapper};
use crate::error::Result;
use crate::layout::SliderLayout;
use crate::presentation::{bounce_spring, stretch_spring, PresentationDerived, REST_SCALE};
use crate::value::ValueStore;

pub struct Slider {
    config: SliderConfig,
    store: ValueStore,
    derived: Derived<PresentationDerived>,
    /// Snapshot of `derived`, refreshed after every consumed move
    presentation: PresentationDerived,
    mapper: DragToDeltaMapper,
    stretch: AnimatedFloat,
    bounce: AnimatedFloat,
    redraw: DirtyFlag,
    origin: Point,
    fill_gradient: VerticalGradient,
    handle_gradient: VerticalGradient,
}

impl Slider {
    /// Build a slider after validating `config`
    pub fn new(config: SliderConfig) -> Result<Self> {
        config.validate()?;

        let mut store = ValueStore::new(config.initial_value);
        let derived = store.derive(PresentationDerived::from_value);
        let presentation = PresentationDerived::from_value(config.initial_value);

        let redraw = DirtyFlag::new();
        let flag = redraw.clone();
        store.subscribe(move |_| flag.raise());

        let mut slider = Self {
            mapper: DragToDeltaMapper::new(config.drag_sensitivity),
            stretch: AnimatedFloat::new(stretch_spring(), REST_SCALE),
            bounce: AnimatedFloat::new(bounce_spring(), REST_SCALE),
            fill_gradient: VerticalGradient::from_colors(&config.fill_colors),
            handle_gradient: VerticalGradient::from_colors(&config.handle_colors),
            origin: Point::ZERO,
            config,
            store,
            derived,
            presentation,
            redraw,
        };
        slider.sync_targets();
        Ok(slider)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn value(&self) -> i32 {
        self.store.get()
    }

    /// `"{value}%"`, as shown above the track
    pub fn label(&self) -> String {
        format!("{}%", self.value())
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.mapper.phase()
    }

    /// Scale targets and fill ratio for the current value
    pub fn presentation(&self) -> PresentationDerived {
        self.presentation
    }

    /// Displayed (animated) stretch and bounce scales
    pub fn displayed_scales(&self) -> (f32, f32) {
        (self.stretch.value(), self.bounce.value())
    }

    /// Top-left corner of the track in window coordinates
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        if origin != self.origin {
            self.origin = origin;
            self.redraw.raise();
        }
    }

    pub fn fill_gradient(&self) -> &VerticalGradient {
        &self.fill_gradient
    }

    pub fn handle_gradient(&self) -> &VerticalGradient {
        &self.handle_gradient
    }

    /// Current frame geometry from the displayed scales
    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(
            self.origin,
            self.value(),
            self.stretch.value(),
            self.bounce.value(),
        )
    }

    /// Offer one pointer event to the slider
    ///
    /// Presses only start a drag on the handle as currently laid out.
    pub fn handle_event(&mut self, event: GestureEvent) -> EventOutcome {
        let handle = self.layout().handle;
        let outcome = self.mapper.handle(event, handle, &mut self.store);
        if matches!(event, GestureEvent::PointerMove(_)) && outcome.is_consumed() {
            self.sync_targets();
        }
        outcome
    }

    /// Advance the springs by `dt` seconds; returns true while animating
    pub fn tick(&mut self, dt: f32) -> bool {
        let stretching = self.stretch.tick(dt);
        let bouncing = self.bounce.tick(dt);
        let animating = stretching || bouncing;
        if animating {
            self.redraw.raise();
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        !(self.stretch.is_settled() && self.bounce.is_settled())
    }

    /// Consume a pending redraw request
    pub fn take_redraw_request(&self) -> bool {
        self.redraw.take()
    }

    fn sync_targets(&mut self) {
        if let Some(presentation) = self.store.read(self.derived) {
            self.presentation = presentation;
        }
        self.stretch.set_target(self.presentation.stretch_scale_target);
        self.bounce.set_target(self.presentation.bounce_scale_target);
    }
}

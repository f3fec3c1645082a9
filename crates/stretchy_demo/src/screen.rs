//! The demo screen: sliders side by side in one row
//!
//! The row is laid out again every frame, so a slider that widens while
//! bouncing pushes its right-hand neighbours over.

use stretchy_core::{EventOutcome, GestureEvent, Point};
use stretchy_slider::{Slider, SliderConfig};

pub const SCREEN_PADDING: f32 = 16.0;
/// Room above the tracks for the value labels
pub const LABEL_HEIGHT: f32 = 48.0;

pub struct DemoScreen {
    sliders: Vec<Slider>,
}

impl DemoScreen {
    pub fn new(configs: Vec<SliderConfig>) -> stretchy_slider::Result<Self> {
        let sliders = configs
            .into_iter()
            .map(Slider::new)
            .collect::<stretchy_slider::Result<Vec<_>>>()?;
        let mut screen = Self { sliders };
        screen.relayout();
        Ok(screen)
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, index: usize) -> Option<&Slider> {
        self.sliders.get(index)
    }

    /// Offer an event to each slider until one consumes it
    pub fn dispatch(&mut self, event: GestureEvent) -> EventOutcome {
        for (index, slider) in self.sliders.iter_mut().enumerate() {
            if slider.handle_event(event).is_consumed() {
                tracing::trace!(index, event = event.name(), "event consumed");
                return EventOutcome::Consumed;
            }
        }
        EventOutcome::Ignored
    }

    /// Advance every slider's animations; returns true while any is animating
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;
        for slider in &mut self.sliders {
            animating |= slider.tick(dt);
        }
        self.relayout();
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.sliders.iter().any(Slider::is_animating)
    }

    /// Whether any slider asked to be redrawn since the last call
    pub fn take_redraw_request(&self) -> bool {
        self.sliders
            .iter()
            .fold(false, |any, slider| slider.take_redraw_request() || any)
    }

    fn relayout(&mut self) {
        let mut x = SCREEN_PADDING;
        for slider in &mut self.sliders {
            slider.set_origin(Point::new(x, SCREEN_PADDING + LABEL_HEIGHT));
            x += slider.layout().track.width();
        }
    }
}

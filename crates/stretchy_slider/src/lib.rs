//! Stretchy Slider
//!
//! A vertical slider driven by a drag on its round handle. Dragging up raises
//! the value, dragging down lowers it, and the value saturates at `0..=100`.
//! When the value reaches 100 the track stretches and the handle bounces on
//! two independent springs.
//!
//! The pieces, bottom-up:
//!
//! - [`ValueStore`]: the bounded value as a reactive cell
//! - [`DragToDeltaMapper`]: turns pointer-move samples into value deltas
//! - [`PresentationDerived`]: scale targets and fill ratio derived from the value
//! - [`SliderLayout`]: frame geometry computed from the displayed scales
//! - [`Slider`]: one widget instance tying the above together
//!
//! # Example
//!
//! ```rust
//! use stretchy_core::{GestureEvent, Vec2};
//! use stretchy_slider::{Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::default()).unwrap();
//! let grab = slider.layout().handle.center();
//!
//! slider.handle_event(GestureEvent::PointerDown(grab));
//! slider.handle_event(GestureEvent::PointerMove(Vec2::new(0.0, -25.0)));
//! slider.handle_event(GestureEvent::PointerUp);
//!
//! assert_eq!(slider.value(), 55);
//! assert_eq!(slider.label(), "55%");
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod layout;
pub mod presentation;
pub mod slider;
pub mod theme;
pub mod value;

pub use config::SliderConfig;
pub use drag::{DragPhase, DragToDeltaMapper, DEFAULT_DRAG_SENSITIVITY};
pub use error::{ConfigError, Result};
pub use layout::SliderLayout;
pub use presentation::{bounce_spring, fill_ratio, stretch_spring, PresentationDerived};
pub use slider::Slider;
pub use theme::SliderTheme;
pub use value::{ValueStore, DEFAULT_VALUE, MAX_VALUE, MIN_VALUE};

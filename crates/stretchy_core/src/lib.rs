//! Stretchy Core Runtime
//!
//! Foundational primitives shared by the Stretchy widgets:
//!
//! - **Reactive Signals**: Fine-grained reactivity with automatic dependency tracking
//! - **Colors & Gradients**: Linear RGBA colors and evenly spaced vertical gradients
//! - **Geometry**: Points, vectors, sizes, and rectangles in density-independent units
//! - **Gesture Events**: The pointer event stream a draggable widget consumes
//!
//! # Example
//!
//! ```rust
//! use stretchy_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! // Create a signal
//! let level = graph.create_signal(50i32);
//!
//! // Create a derived value
//! let ratio = graph.create_derived(move |g| g.get(level).unwrap_or(0) as f32 / 100.0);
//!
//! // Update the signal
//! graph.set(level, 75);
//! assert_eq!(graph.get_derived(ratio), Some(0.75));
//! ```

pub mod color;
pub mod events;
pub mod geometry;
pub mod gradient;
pub mod reactive;

pub use color::{Color, ColorParseError};
pub use events::{EventOutcome, GestureEvent};
pub use geometry::{Point, Rect, Size, Vec2};
pub use gradient::{GradientStop, VerticalGradient};
pub use reactive::{Derived, DirtyFlag, Effect, ReactiveGraph, Signal};

//! Vertical gradients
//!
//! A gradient built from a plain color list spaces its stops evenly from the
//! top edge (offset 0.0) to the bottom edge (offset 1.0) of the painted area.

use crate::color::Color;

/// A color stop in a gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Top-to-bottom linear gradient
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerticalGradient {
    stops: Vec<GradientStop>,
}

impl VerticalGradient {
    /// Evenly spaced stops, first color at the top
    pub fn from_colors(colors: &[Color]) -> Self {
        let stops = match colors {
            [] => Vec::new(),
            [only] => vec![GradientStop::new(0.0, *only)],
            _ => {
                let last = (colors.len() - 1) as f32;
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| GradientStop::new(i as f32 / last, *c))
                    .collect()
            }
        };
        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `t`, where 0.0 is the top edge and 1.0 the bottom edge
    ///
    /// Areas outside the stop range are padded with the end colors.
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::TRANSPARENT,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return Color::lerp(&a.color, &b.color, (t - a.offset) / span);
            }
        }
        last.color
    }
}

//! Frame geometry for one slider
//!
//! All sizes are in dp. The track is `TRACK_WIDTH × TRACK_HEIGHT` at rest; the
//! stretch scale multiplies its height and the bounce scale multiplies its
//! width and the handle diameter. Fill and handle sit on the bottom edge of
//! the padded inner area.

use stretchy_core::{Color, Point, Rect, Size};

use crate::presentation::fill_ratio;
use crate::value::MAX_VALUE;

pub const TRACK_WIDTH: f32 = 60.0;
pub const TRACK_HEIGHT: f32 = 200.0;
pub const TRACK_PADDING: f32 = 8.0;
pub const CORNER_RADIUS: f32 = 12.0;
pub const HANDLE_DIAMETER: f32 = 40.0;
pub const HIGHLIGHT_HEIGHT: f32 = 10.0;

pub fn track_color() -> Color {
    Color::from_hex(0xEFEFEF)
}

/// Top-to-bottom colors of the glare strip shown at the maximum
pub fn highlight_colors() -> [Color; 2] {
    [Color::TRANSPARENT, Color::from_argb(0x88FF_FFFF)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderLayout {
    /// Track background
    pub track: Rect,
    /// Track minus padding
    pub inner: Rect,
    /// Filled part, bottom-anchored
    pub fill: Rect,
    /// Glare strip along the top of the inner area, only at the maximum
    pub highlight: Option<Rect>,
    /// Round handle; also the drag hit region
    pub handle: Rect,
    pub corner_radius: f32,
}

impl SliderLayout {
    /// Track size for the given displayed scales
    pub fn size_for(stretch: f32, bounce: f32) -> Size {
        Size::new(TRACK_WIDTH * bounce, TRACK_HEIGHT * stretch)
    }

    pub fn compute(origin: Point, value: i32, stretch: f32, bounce: f32) -> Self {
        let track = Rect::from_origin_size(origin, Self::size_for(stretch, bounce));
        let inner = track.inset(TRACK_PADDING);

        let fill_height = inner.height() * fill_ratio(value);
        let fill = Rect::new(
            inner.x(),
            inner.bottom() - fill_height,
            inner.width(),
            fill_height,
        );

        let highlight = (value == MAX_VALUE).then(|| {
            Rect::new(
                inner.x(),
                inner.y(),
                inner.width(),
                HIGHLIGHT_HEIGHT.min(inner.height()),
            )
        });

        let diameter = HANDLE_DIAMETER * bounce;
        let handle = Rect::new(
            inner.center().x - diameter / 2.0,
            inner.bottom() - diameter,
            diameter,
            diameter,
        );

        Self {
            track,
            inner,
            fill,
            highlight,
            handle,
            corner_radius: CORNER_RADIUS,
        }
    }
}

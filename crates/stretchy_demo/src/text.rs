//! Text renderer for the demo screen
//!
//! Each slider is sampled on a character grid, one cell per
//! `COL_DP × ROW_DP`. Columns are bottom-aligned so a stretched track grows
//! upward like it does on screen. With color enabled, fill and handle cells
//! use 24-bit ANSI colors sampled from their gradients.

use std::fmt::Write;

use stretchy_core::{Color, Point};
use stretchy_slider::layout::{highlight_colors, track_color};
use stretchy_slider::Slider;

use crate::screen::DemoScreen;

const ROW_DP: f32 = 10.0;
const COL_DP: f32 = 5.0;
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Cell {
    Track,
    Fill(Color),
    Highlight(Color),
    Handle(Color),
}

impl Cell {
    fn glyph(&self) -> char {
        match self {
            Cell::Track => '░',
            Cell::Fill(_) => '█',
            Cell::Highlight(_) => '▀',
            Cell::Handle(_) => '●',
        }
    }

    fn color(&self) -> Color {
        match self {
            Cell::Track => track_color(),
            Cell::Fill(c) | Cell::Highlight(c) | Cell::Handle(c) => *c,
        }
    }
}

/// One rendered slider: `width` visible characters per line
struct Column {
    width: usize,
    lines: Vec<String>,
}

pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, screen: &DemoScreen) -> String {
        let columns: Vec<Column> = screen
            .sliders()
            .iter()
            .map(|slider| self.render_slider(slider))
            .collect();
        let height = columns.iter().map(|c| c.lines.len()).max().unwrap_or(0);

        let mut out = String::new();
        for row in 0..height {
            let line: Vec<String> = columns
                .iter()
                .map(|column| {
                    let pad = height - column.lines.len();
                    if row < pad {
                        " ".repeat(column.width)
                    } else {
                        column.lines[row - pad].clone()
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
        }
        out
    }

    fn render_slider(&self, slider: &Slider) -> Column {
        let layout = slider.layout();
        let track = layout.track;
        let rows = (track.height() / ROW_DP).round().max(1.0) as usize;
        let cols = (track.width() / COL_DP).round().max(1.0) as usize;
        let cell_w = track.width() / cols as f32;
        let cell_h = track.height() / rows as f32;

        let handle_center = layout.handle.center();
        let handle_radius = layout.handle.width() / 2.0;
        let [glare_top, glare_bottom] = highlight_colors();

        let mut lines = Vec::with_capacity(rows + 2);
        lines.push(center(&slider.label(), cols));

        for row in 0..rows {
            let mut line = String::new();
            for col in 0..cols {
                let p = Point::new(
                    track.x() + (col as f32 + 0.5) * cell_w,
                    track.y() + (row as f32 + 0.5) * cell_h,
                );
                let dx = p.x - handle_center.x;
                let dy = p.y - handle_center.y;

                let cell = if dx * dx + dy * dy <= handle_radius * handle_radius {
                    let t = (p.y - layout.handle.y()) / layout.handle.height();
                    Cell::Handle(slider.handle_gradient().sample(t))
                } else if let Some(glare) = layout.highlight.filter(|r| r.contains(p)) {
                    let t = (p.y - glare.y()) / glare.height();
                    Cell::Highlight(Color::lerp(&glare_top, &glare_bottom, t))
                } else if layout.fill.contains(p) {
                    let t = (p.y - layout.fill.y()) / layout.fill.height();
                    Cell::Fill(slider.fill_gradient().sample(t))
                } else {
                    Cell::Track
                };
                self.push_cell(&mut line, cell);
            }
            lines.push(line);
        }

        let (stretch, bounce) = slider.displayed_scales();
        lines.push(center(&format!("{:.2}/{:.2}", stretch, bounce), cols));

        Column { width: cols, lines }
    }

    fn push_cell(&self, line: &mut String, cell: Cell) {
        if self.color {
            let [r, g, b, _] = cell.color().to_rgba8();
            let _ = write!(line, "\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, cell.glyph());
        } else {
            line.push(cell.glyph());
        }
    }
}

/// Center `text` in `width` columns, truncating if it does not fit
fn center(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

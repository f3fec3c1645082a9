//! Stretchy demo
//!
//! Shows four themed sliders, drags one of them along a scripted path and
//! prints the animation frames that follow.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use stretchy_core::{GestureEvent, Vec2};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod screen;
mod text;

use config::DemoConfig;
use screen::DemoScreen;
use text::TextRenderer;

#[derive(Parser)]
#[command(name = "stretchy-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drag a stretchy slider and watch it bounce", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with per-slider options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Index of the slider to drag
    #[arg(short, long, default_value = "0")]
    slider: usize,

    /// Vertical drag samples in dp, comma separated (negative is up)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [-25.0, -25.0, -50.0, -60.0, -60.0]
    )]
    drag: Vec<f32>,

    /// Maximum number of animation frames after the drag
    #[arg(short, long, default_value = "120")]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Print every n-th animation frame
    #[arg(long, default_value = "15")]
    every: u32,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let mut screen = DemoScreen::new(config.slider_configs()?)?;
    let renderer = TextRenderer::new(!cli.no_color);

    if cli.fps == 0 {
        bail!("--fps must be at least 1");
    }
    let Some(target) = screen.slider(cli.slider) else {
        bail!(
            "no slider {} (the screen has {})",
            cli.slider,
            screen.sliders().len()
        );
    };

    print_frame("initial", &renderer, &screen);

    let grab = target.layout().handle.center();
    info!(slider = cli.slider, samples = cli.drag.len(), "dragging");
    screen.dispatch(GestureEvent::PointerDown(grab));
    for &dy in &cli.drag {
        screen.dispatch(GestureEvent::PointerMove(Vec2::new(0.0, dy)));
    }
    screen.dispatch(GestureEvent::PointerUp);
    screen.take_redraw_request();

    print_frame("after drag", &renderer, &screen);

    let dt = 1.0 / cli.fps as f32;
    let every = cli.every.max(1);
    let mut frame = 0;
    while frame < cli.frames {
        frame += 1;
        let animating = screen.tick(dt);
        let redraw = screen.take_redraw_request();
        if !animating {
            debug!(frame, "animations settled");
            break;
        }
        if redraw && frame % every == 0 {
            print_frame(&format!("frame {}", frame), &renderer, &screen);
        }
    }

    let title = if screen.is_animating() {
        format!("still animating after {} frames", frame)
    } else {
        format!("settled after {} frames", frame)
    };
    print_frame(&title, &renderer, &screen);
    Ok(())
}

fn print_frame(title: &str, renderer: &TextRenderer, screen: &DemoScreen) {
    println!("── {} ──", title);
    print!("{}", renderer.render(screen));
    println!();
}

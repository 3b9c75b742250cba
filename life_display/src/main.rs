// main.rs - Windowed host for the fading Game of Life
// R / A resets the board, C / B toggles the colour mode

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use life_core::config::{ALIVE_RATIO, TICK_SKIP_FRAME};
use life_core::{ColorMode, FrameController, LifeConfig, patterns};

mod ui;

use ui::{LifeApp, SCREEN_HT, SCREEN_WD};

/// Command-line arguments for the fading Game of Life window.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Frames between automaton ticks.
    #[arg(
        long = "tick-skip",
        value_name = "FRAMES",
        default_value_t = TICK_SKIP_FRAME,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    tick_skip: u32,
    /// Chance that a cell starts alive after a reset.
    #[arg(long, value_name = "RATIO", default_value_t = ALIVE_RATIO)]
    alive_ratio: f64,
    /// Seed for the reset RNG. Uses system entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Start from a named pattern (Blinker, Glider, Toad, Beacon) instead of a random board.
    #[arg(long, value_name = "NAME")]
    pattern: Option<String>,
    /// Window pixels per board unit.
    #[arg(long, value_name = "PIXELS", default_value_t = 3.0)]
    scale: f32,
    /// Frame callbacks per second.
    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    fps: u32,
    /// Start in hue colour mode instead of grayscale.
    #[arg(long)]
    hue: bool,
    /// Show frame and tick counters.
    #[arg(long)]
    debug_overlay: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let config = LifeConfig {
        tick_skip_frame: args.tick_skip,
        alive_ratio: args.alive_ratio,
        seed: args.seed,
        ..LifeConfig::default()
    };

    let mut controller: FrameController = match &args.pattern {
        Some(name) => FrameController::with_pattern(config, patterns::find(name)?),
        None => FrameController::new(config),
    }
    .context("failed to set up the simulation")?;
    controller.set_color_mode(ColorMode::from(args.hue));

    log::info!(
        "starting {}x{} board, tick every {} frames at {} fps",
        life_core::CELLS_X,
        life_core::CELLS_Y,
        args.tick_skip,
        args.fps
    );

    let scale = args.scale.max(1.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SCREEN_WD * scale, SCREEN_HT * scale]),
        ..Default::default()
    };

    let app = LifeApp::new(controller, args.fps, scale, args.debug_overlay);
    eframe::run_native(
        "Fading Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}

//! Command-line configuration.

use std::path::{Path, PathBuf};

use clap::Parser;

use pong_wars::types::REFRESH_HZ;

/// Frames simulated by `--headless` when `--frames` is not given.
pub const DEFAULT_HEADLESS_FRAMES: u64 = 3000;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pong-wars",
    version,
    about = "Day and night fight over a 10x10 grid, one ball each"
)]
pub struct Args {
    /// PI1 image shown for three seconds before the game starts.
    #[arg(long, value_name = "PATH", default_value = "PONGWARS.PI1")]
    pub splash: PathBuf,

    /// Skip the splash image.
    #[arg(long)]
    pub no_splash: bool,

    /// Refresh rate the simulation is paced to.
    #[arg(long, default_value_t = REFRESH_HZ, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub hz: u32,

    /// Stop after this many frames (0 = until Escape).
    #[arg(long, default_value_t = 0)]
    pub frames: u64,

    /// Simulate without a terminal, as fast as possible, and print the final score.
    #[arg(long)]
    pub headless: bool,

    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn splash_path(&self) -> Option<&Path> {
        if self.no_splash {
            None
        } else {
            Some(&self.splash)
        }
    }

    /// Frame budget: `None` means run until asked to stop.
    pub fn frame_limit(&self) -> Option<u64> {
        match (self.frames, self.headless) {
            (0, true) => Some(DEFAULT_HEADLESS_FRAMES),
            (0, false) => None,
            (n, _) => Some(n),
        }
    }
}

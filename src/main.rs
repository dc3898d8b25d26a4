//! Pong Wars runner (default binary).
//!
//! Renders into an offscreen planar surface, paces one simulation step per
//! refresh, presents the finished frame, then polls for Escape.

mod cli;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pong_wars::core::{GameState, Palette, SplashImage, Surface};
use pong_wars::input::poll_exit_request;
use pong_wars::term::{Display, FramePacer};
use pong_wars::types::SPLASH_FRAMES;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    if args.headless {
        return run_headless(&args);
    }

    if !io::stdout().is_tty() {
        println!("Pong Wars needs an interactive terminal:");
        println!("please run it from a terminal and try again.");
        return Ok(());
    }

    let mut display = Display::new();
    let result = in_session(&mut display, Display::enter, |d| run(d, &args), Display::exit);
    if let Err(err) = result {
        // The terminal is back to normal by now, so the message is readable.
        error!("{err:#}");
        eprintln!("pong-wars: {err:#}");
    }
    Ok(())
}

/// Run `body` between `enter` and `exit`.
///
/// `exit` runs even when `enter` fails halfway, so a terminal left in raw mode
/// is always handed back. The first error wins.
fn in_session<S>(
    state: &mut S,
    enter: impl FnOnce(&mut S) -> Result<()>,
    body: impl FnOnce(&mut S) -> Result<()>,
    exit: impl FnOnce(&mut S) -> Result<()>,
) -> Result<()> {
    let result = enter(state).and_then(|()| body(state));
    let restored = exit(state);
    result.and(restored)
}

/// Logs go to `--log-file` when given. Headless runs fall back to stderr;
/// interactive runs without a log file stay silent, since the terminal is in
/// the alternate screen.
fn init_logging(args: &Args) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run(display: &mut Display, args: &Args) -> Result<()> {
    let mut pacer = FramePacer::new(args.hz);
    let frame_limit = args.frame_limit();

    display.save_palette();
    if let Some(path) = args.splash_path() {
        show_splash(display, &mut pacer, path)?;
    }
    display.set_palette(Palette::game());

    let mut screen = Surface::new();
    let mut game = GameState::new();
    game.init(&mut screen);
    display.present(&screen)?;
    info!(hz = args.hz, ?frame_limit, "simulation started");

    let mut late_frames = 0u64;
    loop {
        game.step(&mut screen);
        if !pacer.wait() {
            late_frames += 1;
        }
        display.present(&screen)?;

        if poll_exit_request()? {
            info!(frame = game.frame(), "exit requested");
            break;
        }
        if frame_limit.is_some_and(|limit| game.frame() >= limit) {
            break;
        }
    }

    let snap = game.snapshot();
    info!(
        frames = snap.frame,
        late_frames,
        day = snap.day_score,
        night = snap.night_score,
        leader = ?snap.leader(),
        "simulation finished"
    );
    Ok(())
}

/// Show the splash image for a few seconds. A missing or broken image is
/// logged and skipped.
fn show_splash(display: &mut Display, pacer: &mut FramePacer, path: &Path) -> Result<()> {
    let image = match SplashImage::load(path) {
        Ok(image) => image,
        Err(err) => {
            warn!(%err, "splash skipped");
            return Ok(());
        }
    };

    display.set_palette(image.palette);
    display.present(&image.surface)?;
    for _ in 0..SPLASH_FRAMES {
        pacer.wait();
    }
    Ok(())
}

fn run_headless(args: &Args) -> Result<()> {
    let frames = args.frame_limit().unwrap_or(cli::DEFAULT_HEADLESS_FRAMES);

    let mut screen = Surface::new();
    let mut game = GameState::new();
    game.init(&mut screen);

    let mut captures = 0u64;
    let mut contacts = 0u64;
    for _ in 0..frames {
        let report = game.step(&mut screen);
        captures += report.captures as u64;
        contacts += report.ball_contact as u64;
    }

    let snap = game.snapshot();
    info!(
        frames = snap.frame,
        captures,
        contacts,
        day = snap.day_score,
        night = snap.night_score,
        "headless run completed"
    );
    println!(
        "frames={} day={} night={} captures={} contacts={}",
        snap.frame, snap.day_score, snap.night_score, captures, contacts
    );
    Ok(())
}

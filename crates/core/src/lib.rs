//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole Pong Wars engine: the planar pixel surface,
//! the rectangle rasterizer, the territory grid, the ball physics, the score
//! counters and the per-frame orchestrator. It does no terminal I/O, so it:
//!
//! - **Deterministic**: there is no randomness; the same start always plays
//!   out the same way
//! - **Testable**: every phase can be driven against an in-memory surface or
//!   any other [`Canvas`]
//! - **Fast**: fixed-size arrays only; a frame step never allocates
//!
//! # Module Structure
//!
//! - [`surface`]: 320x200 4-plane interleaved pixel buffer
//! - [`raster`]: the [`Canvas`] trait and rectangle fills
//! - [`palette`]: 16-entry 9-bit colour table
//! - [`board`]: 10x10 territory grid with running scores
//! - [`ball`]: ball movement, edge reflection, capture and contact rules
//! - [`text`]: 5x7 digit font and score counters
//! - [`game_state`]: one frame of the simulation
//! - [`snapshot`]: plain copies of the state for observers
//! - [`splash`]: PI1 start-up image decoding
//!
//! # Example
//!
//! ```
//! use pong_wars_core::{GameState, Surface};
//!
//! let mut surface = Surface::new();
//! let mut game = GameState::new();
//! game.init(&mut surface);
//!
//! for _ in 0..100 {
//!     game.step(&mut surface);
//! }
//!
//! assert_eq!(game.day_score() + game.night_score(), 100);
//! ```

pub mod ball;
pub mod board;
pub mod game_state;
pub mod palette;
pub mod raster;
pub mod snapshot;
pub mod splash;
pub mod surface;
pub mod text;

pub use pong_wars_types as types;

// Re-export commonly used types for convenience
pub use ball::{resolve_ball_contact, Ball, BounceAxis};
pub use board::{Board, PaintOutcome};
pub use game_state::{FrameReport, GameState};
pub use palette::{st_color, Palette};
pub use raster::Canvas;
pub use snapshot::GameSnapshot;
pub use splash::{SplashError, SplashImage};
pub use surface::Surface;
pub use text::{decimal_digits, draw_counters, draw_number};

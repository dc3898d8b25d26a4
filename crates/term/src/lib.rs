//! Terminal presentation layer.
//!
//! The core renders into a planar [`Surface`](crate::core::Surface). This
//! crate turns that surface into something a terminal can show, and supplies
//! the two timing/ownership pieces the frame loop needs:
//!
//! - [`SurfaceView`] decodes planes + palette into a half-block [`CellGrid`]
//! - [`TerminalRenderer`] writes grids as colour-aware diffs
//! - [`Display`] is the physical screen: presentation copy, palette slots
//! - [`FramePacer`] blocks once per refresh interval

pub mod display;
pub mod grid;
pub mod pacer;
pub mod renderer;
pub mod surface_view;

pub use pong_wars_core as core;
pub use pong_wars_types as types;

pub use display::Display;
pub use grid::{CellGrid, PixelPair, Rgb};
pub use pacer::{FramePacer, PaceClock};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, HALF_BLOCK};
pub use surface_view::{AnchorY, Placement, SurfaceView, Viewport};

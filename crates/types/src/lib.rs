//! Core types module - shared constants and the territory owner tag
//!
//! Everything the simulation needs to know about geometry is fixed at compile
//! time. Nothing here allocates or depends on any other crate, so the values
//! can be used from the core logic, the terminal presenter and the tests alike.
//!
//! # Display Surface
//!
//! The surface mimics a 16-colour low-resolution planar framebuffer:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 320 | Pixels per line |
//! | `SCREEN_HEIGHT` | 200 | Lines |
//! | `PLANES` | 4 | 1-bit planes, one bit of the colour index each |
//! | `WORDS_PER_LINE` | 80 | 20 groups of 16 pixels x 4 planes |
//! | `SURFACE_BYTES` | 32000 | Whole surface |
//!
//! # Play Area
//!
//! A 200x200 pixel game area sits horizontally centred on the surface. It is
//! covered by a 10x10 grid of 20 pixel territory squares. The 60 pixel margins
//! to the left and right hold the two score counters.
//!
//! # Examples
//!
//! ```
//! use pong_wars_types::{Owner, GAME_PIXELS, GRID_SIZE, SQUARE_SIZE};
//!
//! assert_eq!(GRID_SIZE as i32 * SQUARE_SIZE, GAME_PIXELS);
//! assert_eq!(Owner::Day.opponent(), Owner::Night);
//! ```

/// Surface width in pixels.
pub const SCREEN_WIDTH: i32 = 320;

/// Surface height in pixels.
pub const SCREEN_HEIGHT: i32 = 200;

/// Number of 1-bit planes (4 bits per pixel).
pub const PLANES: usize = 4;

/// Pixels covered by one plane word.
pub const GROUP_PIXELS: i32 = 16;

/// 16-bit words per surface line: one word per plane per 16-pixel group.
pub const WORDS_PER_LINE: usize = (SCREEN_WIDTH / GROUP_PIXELS) as usize * PLANES;

/// Total surface size in bytes.
pub const SURFACE_BYTES: usize = WORDS_PER_LINE * SCREEN_HEIGHT as usize * 2;

/// Territory grid size (cells per side).
pub const GRID_SIZE: usize = 10;

/// Total number of territory cells.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Territory square size in pixels.
pub const SQUARE_SIZE: i32 = 20;

/// Game area size in pixels (both axes).
pub const GAME_PIXELS: i32 = GRID_SIZE as i32 * SQUARE_SIZE;

/// Left edge of the game area on the surface.
pub const GAME_LEFT: i32 = (SCREEN_WIDTH - GAME_PIXELS) / 2;

/// Top edge of the game area on the surface.
pub const GAME_TOP: i32 = (SCREEN_HEIGHT - GAME_PIXELS) / 2;

/// Ball edge length in pixels.
pub const BALL_SIZE: i32 = 10;

/// Ball speed along the major axis, in pixels per frame.
pub const BALL_VELOCITY: i32 = 10;

/// Glyph width in pixels.
pub const DIGIT_WIDTH: i32 = 5;

/// Glyph height in pixels.
pub const DIGIT_HEIGHT: i32 = 7;

/// Widest score the layout reserves room for.
pub const MAX_SCORE_DIGITS: i32 = 3;

/// Width of a maximal score string, including the 1 pixel gaps.
pub const MAX_SCORE_WIDTH: i32 = MAX_SCORE_DIGITS * (DIGIT_WIDTH + 1) - 1;

/// Left edge of the day counter.
pub const LEFT_SCORE_X: i32 = (GAME_LEFT - MAX_SCORE_WIDTH) / 2;

/// Left edge of the night counter.
pub const RIGHT_SCORE_X: i32 = GAME_LEFT + GAME_PIXELS + (GAME_LEFT - MAX_SCORE_WIDTH) / 2 + DIGIT_WIDTH;

/// Vertical centre line of both counters.
pub const SCORE_CENTER_Y: i32 = SCREEN_HEIGHT / 2;

/// Background / border colour index.
pub const COLOR_BG: u8 = 0;

/// Day territory colour index.
pub const DAY_COLOR: u8 = 1;

/// Night territory colour index.
pub const NIGHT_COLOR: u8 = 2;

/// Day ball colour index (dark ball on the light side).
pub const DAY_BALL_COLOR: u8 = 3;

/// Night ball colour index (light ball on the dark side).
pub const NIGHT_BALL_COLOR: u8 = 4;

/// Counter text colour index.
pub const COLOR_TEXT: u8 = 15;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 16;

/// Display refresh rate the simulation is paced to (PAL vertical blank).
pub const REFRESH_HZ: u32 = 50;

/// Frames the splash image stays up (3 seconds at 50 Hz).
pub const SPLASH_FRAMES: u32 = 150;

/// Width of the cursor guard rectangle overdrawn at the surface origin each frame.
pub const CURSOR_GUARD_W: i32 = 8;

/// Height of the cursor guard rectangle.
pub const CURSOR_GUARD_H: i32 = 16;

/// Territory owner. Every cell always has one; there is no unclaimed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Day,
    Night,
}

impl Owner {
    /// Colour index used to paint this owner's territory.
    pub const fn territory_color(self) -> u8 {
        match self {
            Owner::Day => DAY_COLOR,
            Owner::Night => NIGHT_COLOR,
        }
    }

    /// Colour index of the ball playing for this owner.
    pub const fn ball_color(self) -> u8 {
        match self {
            Owner::Day => DAY_BALL_COLOR,
            Owner::Night => NIGHT_BALL_COLOR,
        }
    }

    pub const fn opponent(self) -> Owner {
        match self {
            Owner::Day => Owner::Night,
            Owner::Night => Owner::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Owner::Day => "day",
            Owner::Night => "night",
        }
    }
}

//! Game state module - the per-frame orchestrator
//!
//! This module ties together the board, the two balls and the counters. One
//! call to [`GameState::step`] is one frame; the caller paces the calls at the
//! display refresh rate and presents the canvas afterwards.
//!
//! A frame runs these phases, in this order:
//!
//! 1. cursor guard - blank the 8x16 block at the surface origin
//! 2. erase - restore the territory under both balls
//! 3. move - each ball in turn: reflect, advance, clamp, capture, perturb
//! 4. contact - exchange velocities if the balls touch
//! 5. draw - both balls on top of the territory
//! 6. counters - redraw both scores if any cell changed hands

use tracing::{debug, info};

use crate::ball::{resolve_ball_contact, Ball};
use crate::board::Board;
use crate::raster::Canvas;
use crate::snapshot::GameSnapshot;
use crate::text::draw_counters;
use crate::types::{COLOR_BG, CURSOR_GUARD_H, CURSOR_GUARD_W};

/// What happened during one [`GameState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Frame number of the step that produced this report.
    pub frame: u64,
    /// Cells that changed hands.
    pub captures: u8,
    /// The balls touched and swapped velocities.
    pub ball_contact: bool,
    /// The counters were redrawn.
    pub scores_redrawn: bool,
}

/// Complete simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    balls: [Ball; 2],
    /// Frames stepped so far. Not displayed.
    frame: u64,
}

impl GameState {
    /// Starting split with both balls at their initial positions.
    pub fn new() -> Self {
        Self::from_parts(Board::new(), Ball::initial_pair())
    }

    pub fn from_parts(board: Board, balls: [Ball; 2]) -> Self {
        Self {
            board,
            balls,
            frame: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn balls(&self) -> &[Ball; 2] {
        &self.balls
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn day_score(&self) -> u32 {
        self.board.day_score()
    }

    pub fn night_score(&self) -> u32 {
        self.board.night_score()
    }

    /// Draw the complete first frame: background, every cell, both balls and
    /// both counters.
    pub fn init<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.clear();
        self.board.draw_all(canvas);
        self.draw_balls(canvas);
        self.redraw_scores(canvas);
        info!(
            day = self.board.day_score(),
            night = self.board.night_score(),
            "board initialised"
        );
    }

    /// Advance the simulation by one frame and render it into `canvas`.
    pub fn step<C: Canvas>(&mut self, canvas: &mut C) -> FrameReport {
        self.guard_cursor_area(canvas);
        self.erase_balls(canvas);
        let captures = self.move_balls(canvas);
        let ball_contact = self.resolve_contact();
        self.draw_balls(canvas);
        let scores_redrawn = self.redraw_scores(canvas);

        let report = FrameReport {
            frame: self.frame,
            captures,
            ball_contact,
            scores_redrawn,
        };
        self.frame += 1;

        if captures > 0 || ball_contact {
            debug!(
                frame = report.frame,
                captures,
                ball_contact,
                day = self.board.day_score(),
                night = self.board.night_score(),
                "frame stepped"
            );
        }
        report
    }

    fn guard_cursor_area<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_rect(0, 0, CURSOR_GUARD_W, CURSOR_GUARD_H, COLOR_BG);
    }

    fn erase_balls<C: Canvas>(&self, canvas: &mut C) {
        for ball in &self.balls {
            ball.erase(&self.board, canvas);
        }
    }

    /// Each ball is fully resolved before the next one moves.
    fn move_balls<C: Canvas>(&mut self, canvas: &mut C) -> u8 {
        let mut captures = 0;
        for ball in self.balls.iter_mut() {
            let from = ball.grid_cell();

            ball.reflect_at_bounds();
            ball.advance();
            ball.clamp_to_area();

            if ball
                .collide_with_territory(&mut self.board, canvas, from)
                .is_some()
            {
                captures += 1;
            }
            ball.perturb();
        }
        captures
    }

    fn resolve_contact(&mut self) -> bool {
        resolve_ball_contact(&mut self.balls)
    }

    fn draw_balls<C: Canvas>(&self, canvas: &mut C) {
        for ball in &self.balls {
            ball.draw(canvas);
        }
    }

    fn redraw_scores<C: Canvas>(&mut self, canvas: &mut C) -> bool {
        if !self.board.is_dirty() {
            return false;
        }
        draw_counters(canvas, &self.board);
        self.board.clear_dirty();
        true
    }

    /// Plain copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.owners = self.board.rows();
        out.day_score = self.board.day_score();
        out.night_score = self.board.night_score();
        out.balls = self.balls;
        out.frame = self.frame;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use crate::types::{Owner, GAME_LEFT, GRID_CELLS};

    #[test]
    fn test_init_draws_full_frame() {
        let mut gs = GameState::new();
        let mut s = Surface::new();
        gs.init(&mut s);

        assert_eq!(s.pixel(GAME_LEFT, 0), Some(Owner::Day.territory_color()));
        assert_eq!(s.pixel(GAME_LEFT + 199, 199), Some(Owner::Night.territory_color()));
        let day_ball = gs.balls()[0];
        assert_eq!(
            s.pixel(GAME_LEFT + day_ball.x, day_ball.y),
            Some(day_ball.color)
        );
        assert!(!gs.board().is_dirty());
    }

    #[test]
    fn test_first_step_moves_both_balls() {
        let mut gs = GameState::new();
        let mut s = Surface::new();
        gs.init(&mut s);
        let report = gs.step(&mut s);

        assert_eq!(report.frame, 0);
        assert_eq!(gs.frame(), 1);
        assert_eq!((gs.balls()[0].x, gs.balls()[0].y), (55, 110));
        assert_eq!((gs.balls()[1].x, gs.balls()[1].y), (140, 95));
        assert_eq!(report.captures, 0);
        assert!(!report.scores_redrawn);
    }

    #[test]
    fn test_scores_conserved_over_many_frames() {
        let mut gs = GameState::new();
        let mut s = Surface::new();
        gs.init(&mut s);

        for _ in 0..2000 {
            gs.step(&mut s);
            assert_eq!(gs.day_score() + gs.night_score(), GRID_CELLS as u32);
            assert_eq!(gs.day_score(), gs.board().count(Owner::Day));
            for ball in gs.balls() {
                assert!((0..=190).contains(&ball.x));
                assert!((0..=190).contains(&ball.y));
            }
        }
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut gs = GameState::new();
        let mut s = Surface::new();
        gs.step(&mut s);
        let snap = gs.snapshot();
        assert_eq!(snap.frame, 1);
        assert_eq!(snap.balls, *gs.balls());
        assert_eq!(snap.owners, gs.board().rows());
        assert_eq!(snap.day_score, gs.day_score());
    }
}

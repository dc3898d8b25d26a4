//! Ball physics.
//!
//! Balls move in whole pixels inside the 200x200 game area (positions are
//! relative to the area, not the surface). Velocities only ever change sign,
//! except for the full exchange when the two balls touch.
//!
//! Per frame, each ball goes through these steps in order:
//!
//! 1. remember the grid cell under its centre
//! 2. [`Ball::reflect_at_bounds`] - look-ahead edge test
//! 3. [`Ball::advance`]
//! 4. [`Ball::clamp_to_area`]
//! 5. [`Ball::collide_with_territory`] against the cell remembered in step 1
//! 6. [`Ball::perturb`]

use tracing::debug;

use crate::board::{Board, PaintOutcome};
use crate::raster::Canvas;
use crate::types::{Owner, BALL_SIZE, BALL_VELOCITY, GAME_LEFT, GAME_PIXELS, GAME_TOP, SQUARE_SIZE};

/// Which velocity components a collision negates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Moved into the cell sideways: flip `vx`.
    X,
    /// Moved into the cell vertically: flip `vy`.
    Y,
    /// Diagonal entry, or no cell change at all: flip both.
    Both,
}

impl BounceAxis {
    /// Infer the bounce from the grid-cell delta between frame start and the
    /// captured cell.
    pub fn from_cell_delta(dgx: i32, dgy: i32) -> Self {
        match (dgx != 0, dgy != 0) {
            (true, false) => BounceAxis::X,
            (false, true) => BounceAxis::Y,
            _ => BounceAxis::Both,
        }
    }

    pub fn apply(self, ball: &mut Ball) {
        match self {
            BounceAxis::X => ball.vx = -ball.vx,
            BounceAxis::Y => ball.vy = -ball.vy,
            BounceAxis::Both => {
                ball.vx = -ball.vx;
                ball.vy = -ball.vy;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    /// Top-left corner, game-area pixels.
    pub x: i32,
    pub y: i32,
    /// Pixels per frame.
    pub vx: i32,
    pub vy: i32,
    pub owner: Owner,
    pub color: u8,
}

impl Ball {
    pub fn new(x: i32, y: i32, vx: i32, vy: i32, owner: Owner) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            owner,
            color: owner.ball_color(),
        }
    }

    /// The day ball starts a quarter of the way in, heading down-right.
    pub fn day() -> Self {
        Self::new(
            GAME_PIXELS / 4,
            GAME_PIXELS / 2,
            BALL_VELOCITY / 2,
            BALL_VELOCITY,
            Owner::Day,
        )
    }

    /// The night ball starts three quarters of the way in, heading up-left.
    pub fn night() -> Self {
        Self::new(
            GAME_PIXELS * 3 / 4,
            GAME_PIXELS / 2,
            -BALL_VELOCITY,
            -BALL_VELOCITY / 2,
            Owner::Night,
        )
    }

    pub fn initial_pair() -> [Ball; 2] {
        [Self::day(), Self::night()]
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + BALL_SIZE / 2, self.y + BALL_SIZE / 2)
    }

    /// Grid cell containing the ball's centre (may be off the grid).
    pub fn grid_cell(&self) -> (i32, i32) {
        let (cx, cy) = self.center();
        (cx / SQUARE_SIZE, cy / SQUARE_SIZE)
    }

    /// Restore the territory under the ball.
    ///
    /// Each cell the ball box touches gets only its overlap with the box
    /// refilled, in that cell's current colour.
    pub fn erase<C: Canvas>(&self, board: &Board, canvas: &mut C) {
        let ball_left = self.x;
        let ball_top = self.y;
        let ball_right = ball_left + BALL_SIZE - 1;
        let ball_bottom = ball_top + BALL_SIZE - 1;

        let min_gx = ball_left / SQUARE_SIZE;
        let max_gx = ball_right / SQUARE_SIZE;
        let min_gy = ball_top / SQUARE_SIZE;
        let max_gy = ball_bottom / SQUARE_SIZE;

        for gy in min_gy..=max_gy {
            for gx in min_gx..=max_gx {
                let cell_left = gx * SQUARE_SIZE;
                let cell_top = gy * SQUARE_SIZE;
                let cell_right = cell_left + SQUARE_SIZE - 1;
                let cell_bottom = cell_top + SQUARE_SIZE - 1;

                let left = cell_left.max(ball_left);
                let top = cell_top.max(ball_top);
                let right = cell_right.min(ball_right);
                let bottom = cell_bottom.min(ball_bottom);

                if left <= right && top <= bottom {
                    canvas.fill_rect(
                        GAME_LEFT + left,
                        GAME_TOP + top,
                        right - left + 1,
                        bottom - top + 1,
                        board.color_at(gx, gy),
                    );
                }
            }
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_rect(
            GAME_LEFT + self.x,
            GAME_TOP + self.y,
            BALL_SIZE,
            BALL_SIZE,
            self.color,
        );
    }

    /// Negate a velocity component if the next move would leave the area.
    pub fn reflect_at_bounds(&mut self) {
        if self.x + self.vx < 0 || self.x + BALL_SIZE + self.vx > GAME_PIXELS {
            self.vx = -self.vx;
        }
        if self.y + self.vy < 0 || self.y + BALL_SIZE + self.vy > GAME_PIXELS {
            self.vy = -self.vy;
        }
    }

    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Pull the ball back inside `[0, GAME_PIXELS - BALL_SIZE]`, flipping the
    /// velocity of any axis that had to be corrected.
    pub fn clamp_to_area(&mut self) {
        let max = GAME_PIXELS - BALL_SIZE;
        if self.x < 0 {
            self.x = 0;
            self.vx = -self.vx;
        }
        if self.y < 0 {
            self.y = 0;
            self.vy = -self.vy;
        }
        if self.x > max {
            self.x = max;
            self.vx = -self.vx;
        }
        if self.y > max {
            self.y = max;
            self.vy = -self.vy;
        }
    }

    /// Capture the cell under the ball's centre if the other side owns it.
    ///
    /// `from` is the cell the centre was in at the start of the frame; the
    /// delta to the current cell picks the bounce axis. A cell the ball's side
    /// already owns is passed through [`Board::paint_cell`] as well, which
    /// leaves it untouched. Returns the bounce applied, if any.
    pub fn collide_with_territory<C: Canvas>(
        &mut self,
        board: &mut Board,
        canvas: &mut C,
        from: (i32, i32),
    ) -> Option<BounceAxis> {
        let (gx, gy) = self.grid_cell();
        let owner = board.get(gx, gy)?;

        if owner == self.owner {
            board.paint_cell(canvas, gx, gy, self.owner);
            return None;
        }

        let outcome = board.paint_cell(canvas, gx, gy, self.owner);
        debug_assert!(matches!(outcome, PaintOutcome::Captured { .. }));

        let axis = BounceAxis::from_cell_delta(gx - from.0, gy - from.1);
        axis.apply(self);
        Some(axis)
    }

    /// Reserved for a random nudge to the trajectory. Currently leaves the
    /// ball unchanged.
    pub fn perturb(&mut self) {}
}

/// Swap the velocities of two balls whose boxes overlap.
///
/// The test is a coarse one on top-left corners: both axis distances must be
/// below the ball size. Positions are not touched. Returns whether a swap
/// happened.
pub fn resolve_ball_contact(balls: &mut [Ball; 2]) -> bool {
    let dx = (balls[0].x - balls[1].x).abs();
    let dy = (balls[0].y - balls[1].y).abs();

    if dx < BALL_SIZE && dy < BALL_SIZE {
        let [a, b] = balls;
        std::mem::swap(&mut a.vx, &mut b.vx);
        std::mem::swap(&mut a.vy, &mut b.vy);
        debug!(dx, dy, "balls exchanged velocities");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use crate::types::{DAY_COLOR, NIGHT_COLOR};

    #[test]
    fn test_initial_pair() {
        let [day, night] = Ball::initial_pair();
        assert_eq!((day.x, day.y, day.vx, day.vy), (50, 100, 5, 10));
        assert_eq!((night.x, night.y, night.vx, night.vy), (150, 100, -10, -5));
        assert_eq!(day.color, Owner::Day.ball_color());
        assert_eq!(night.owner, Owner::Night);
    }

    #[test]
    fn test_bounce_axis_inference() {
        assert_eq!(BounceAxis::from_cell_delta(1, 0), BounceAxis::X);
        assert_eq!(BounceAxis::from_cell_delta(-1, 0), BounceAxis::X);
        assert_eq!(BounceAxis::from_cell_delta(0, 1), BounceAxis::Y);
        assert_eq!(BounceAxis::from_cell_delta(0, -2), BounceAxis::Y);
        assert_eq!(BounceAxis::from_cell_delta(1, 1), BounceAxis::Both);
        assert_eq!(BounceAxis::from_cell_delta(0, 0), BounceAxis::Both);
    }

    #[test]
    fn test_reflect_is_look_ahead() {
        let mut ball = Ball::new(5, 100, -10, 0, Owner::Day);
        ball.reflect_at_bounds();
        assert_eq!(ball.vx, 10);
        assert_eq!(ball.x, 5);

        let mut ball = Ball::new(185, 185, 10, 10, Owner::Day);
        ball.reflect_at_bounds();
        assert_eq!((ball.vx, ball.vy), (-10, -10));

        // Landing exactly on the edge is allowed.
        let mut ball = Ball::new(180, 0, 10, 0, Owner::Day);
        ball.reflect_at_bounds();
        assert_eq!(ball.vx, 10);
    }

    #[test]
    fn test_clamp_flips_corrected_axis() {
        let mut ball = Ball::new(-3, 195, -4, 6, Owner::Night);
        ball.clamp_to_area();
        assert_eq!((ball.x, ball.y), (0, 190));
        assert_eq!((ball.vx, ball.vy), (4, -6));

        let mut ball = Ball::new(20, 20, 3, 3, Owner::Night);
        ball.clamp_to_area();
        assert_eq!((ball.vx, ball.vy), (3, 3));
    }

    #[test]
    fn test_erase_restores_each_cell_overlap() {
        let board = Board::new();
        let mut s = Surface::new();

        // Straddles the day/night border at x = 100 and the row border at y = 20.
        let ball = Ball::new(95, 15, 0, 0, Owner::Day);
        ball.draw(&mut s);
        ball.erase(&board, &mut s);

        assert_eq!(s.pixel(GAME_LEFT + 95, 15), Some(DAY_COLOR));
        assert_eq!(s.pixel(GAME_LEFT + 99, 24), Some(DAY_COLOR));
        assert_eq!(s.pixel(GAME_LEFT + 100, 15), Some(NIGHT_COLOR));
        assert_eq!(s.pixel(GAME_LEFT + 104, 24), Some(NIGHT_COLOR));
        // Outside the ball box nothing was painted.
        assert_eq!(s.pixel(GAME_LEFT + 105, 15), Some(0));
        assert_eq!(s.pixel(GAME_LEFT + 95, 25), Some(0));
    }

    #[test]
    fn test_capture_bounces_horizontally() {
        let mut board = Board::new();
        let mut s = Surface::new();

        // Centre moved from cell (4, 5) into night cell (5, 5).
        let mut ball = Ball::new(96, 100, 5, 10, Owner::Day);
        let axis = ball.collide_with_territory(&mut board, &mut s, (4, 5));

        assert_eq!(axis, Some(BounceAxis::X));
        assert_eq!((ball.vx, ball.vy), (-5, 10));
        assert_eq!(board.get(5, 5), Some(Owner::Day));
        assert_eq!(board.day_score(), 51);
    }

    #[test]
    fn test_own_cell_does_not_bounce_or_score() {
        let mut board = Board::new();
        board.clear_dirty();
        let mut s = Surface::new();

        let mut ball = Ball::new(50, 100, 5, 10, Owner::Day);
        let axis = ball.collide_with_territory(&mut board, &mut s, (2, 5));

        assert_eq!(axis, None);
        assert_eq!((ball.vx, ball.vy), (5, 10));
        assert_eq!(board.day_score(), 50);
        assert!(!board.is_dirty());
    }

    #[test]
    fn test_ball_contact_swaps_velocities_only() {
        let mut balls = [
            Ball::new(100, 100, 5, 10, Owner::Day),
            Ball::new(109, 91, -10, -5, Owner::Night),
        ];
        assert!(resolve_ball_contact(&mut balls));
        assert_eq!((balls[0].vx, balls[0].vy), (-10, -5));
        assert_eq!((balls[1].vx, balls[1].vy), (5, 10));
        assert_eq!((balls[0].x, balls[0].y), (100, 100));
        assert_eq!((balls[1].x, balls[1].y), (109, 91));
    }

    #[test]
    fn test_ball_contact_needs_both_axes() {
        let mut balls = [
            Ball::new(100, 100, 5, 10, Owner::Day),
            Ball::new(110, 95, -10, -5, Owner::Night),
        ];
        assert!(!resolve_ball_contact(&mut balls));
        assert_eq!((balls[0].vx, balls[0].vy), (5, 10));
    }
}

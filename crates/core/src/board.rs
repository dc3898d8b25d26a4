//! Board module - the territory grid
//!
//! The board is a 10x10 grid where every cell belongs to either day or night.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (gx, gy) where both range 0..9, gx left to right, gy top to bottom.
//!
//! Two running totals track how many cells each side owns. Every ownership
//! change goes through [`Board::paint_cell`], which moves one point from the
//! previous owner to the new one, so `day_score + night_score == GRID_CELLS`
//! at all times.

use tracing::debug;

use crate::raster::Canvas;
use crate::types::{Owner, COLOR_BG, GAME_LEFT, GAME_TOP, GRID_CELLS, GRID_SIZE, SQUARE_SIZE};

/// Result of a [`Board::paint_cell`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Coordinates were off the grid; nothing happened.
    OutOfBounds,
    /// The cell already had the requested owner; nothing happened.
    Unchanged,
    /// Ownership moved from `previous` to the requested owner.
    Captured { previous: Owner },
}

/// The territory grid with its score bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of owners, row-major order (gy * GRID_SIZE + gx)
    cells: [Owner; GRID_CELLS],
    day_score: u32,
    night_score: u32,
    /// Set on every ownership change, cleared once the counters are redrawn.
    dirty: bool,
}

impl Board {
    /// Create a board split down the middle: left half day, right half night.
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Owner::Day; GRID_CELLS],
            day_score: 0,
            night_score: 0,
            dirty: false,
        };
        board.init();
        board
    }

    /// Build a board from explicit rows (`rows[gy][gx]`). Scores are counted
    /// from the cells and the board starts dirty.
    pub fn from_rows(rows: [[Owner; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cells = [Owner::Day; GRID_CELLS];
        for (gy, row) in rows.iter().enumerate() {
            cells[gy * GRID_SIZE..(gy + 1) * GRID_SIZE].copy_from_slice(row);
        }
        let mut board = Self {
            cells,
            day_score: 0,
            night_score: 0,
            dirty: false,
        };
        board.recount();
        board
    }

    /// Reset to the starting split and recompute both scores from scratch.
    pub fn init(&mut self) {
        for gy in 0..GRID_SIZE {
            for gx in 0..GRID_SIZE {
                self.cells[gy * GRID_SIZE + gx] = if gx < GRID_SIZE / 2 {
                    Owner::Day
                } else {
                    Owner::Night
                };
            }
        }
        self.recount();
    }

    fn recount(&mut self) {
        self.day_score = self.count(Owner::Day);
        self.night_score = self.count(Owner::Night);
        self.dirty = true;
    }

    /// Calculate flat index from grid coordinates
    #[inline(always)]
    fn index(gx: i32, gy: i32) -> Option<usize> {
        if gx < 0 || gx >= GRID_SIZE as i32 || gy < 0 || gy >= GRID_SIZE as i32 {
            return None;
        }
        Some((gy as usize) * GRID_SIZE + (gx as usize))
    }

    /// Owner of a cell, `None` if off the grid.
    pub fn get(&self, gx: i32, gy: i32) -> Option<Owner> {
        Self::index(gx, gy).map(|idx| self.cells[idx])
    }

    /// Copy the grid out as rows (`rows[gy][gx]`).
    pub fn rows(&self) -> [[Owner; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[Owner::Day; GRID_SIZE]; GRID_SIZE];
        for (gy, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[gy * GRID_SIZE..(gy + 1) * GRID_SIZE]);
        }
        rows
    }

    pub fn day_score(&self) -> u32 {
        self.day_score
    }

    pub fn night_score(&self) -> u32 {
        self.night_score
    }

    /// Count cells by scanning the grid (independent of the running totals).
    pub fn count(&self, owner: Owner) -> u32 {
        self.cells.iter().filter(|c| **c == owner).count() as u32
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Surface rectangle `(x, y, w, h)` covered by a cell.
    pub fn cell_rect(gx: i32, gy: i32) -> (i32, i32, i32, i32) {
        (
            GAME_LEFT + gx * SQUARE_SIZE,
            GAME_TOP + gy * SQUARE_SIZE,
            SQUARE_SIZE,
            SQUARE_SIZE,
        )
    }

    /// Territory colour at a grid position; background off the grid.
    pub fn color_at(&self, gx: i32, gy: i32) -> u8 {
        self.get(gx, gy)
            .map(Owner::territory_color)
            .unwrap_or(COLOR_BG)
    }

    /// Repaint one cell in its owner's colour.
    pub fn draw_cell<C: Canvas>(&self, canvas: &mut C, gx: i32, gy: i32) {
        let Some(owner) = self.get(gx, gy) else {
            return;
        };
        let (x, y, w, h) = Self::cell_rect(gx, gy);
        canvas.fill_rect(x, y, w, h, owner.territory_color());
    }

    /// Full redraw of every cell. Only needed for the first frame.
    pub fn draw_all<C: Canvas>(&self, canvas: &mut C) {
        for gy in 0..GRID_SIZE as i32 {
            for gx in 0..GRID_SIZE as i32 {
                self.draw_cell(canvas, gx, gy);
            }
        }
    }

    /// Give a cell to `owner`.
    ///
    /// Off-grid coordinates and cells that already belong to `owner` are
    /// no-ops: no score change, no pixel writes, dirty flag untouched. Repeated
    /// calls with the same owner therefore never drift the totals.
    pub fn paint_cell<C: Canvas>(
        &mut self,
        canvas: &mut C,
        gx: i32,
        gy: i32,
        owner: Owner,
    ) -> PaintOutcome {
        let Some(idx) = Self::index(gx, gy) else {
            return PaintOutcome::OutOfBounds;
        };

        let previous = self.cells[idx];
        if previous == owner {
            return PaintOutcome::Unchanged;
        }

        match previous {
            Owner::Day => self.day_score -= 1,
            Owner::Night => self.night_score -= 1,
        }
        self.cells[idx] = owner;
        match owner {
            Owner::Day => self.day_score += 1,
            Owner::Night => self.night_score += 1,
        }
        self.dirty = true;

        self.draw_cell(canvas, gx, gy);
        debug!(
            gx,
            gy,
            owner = owner.as_str(),
            day = self.day_score,
            night = self.night_score,
            "cell captured"
        );
        PaintOutcome::Captured { previous }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

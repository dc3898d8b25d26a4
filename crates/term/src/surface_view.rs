//! SurfaceView: decodes a planar surface into a half-block cell grid.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal cell shows two vertically stacked surface pixels. The
//! 320x200 image is scaled (nearest neighbour, aspect preserved) to the
//! largest size that fits the viewport; the margins get the border colour.

use crate::core::{Palette, Surface};
use crate::grid::{CellGrid, PixelPair, Rgb};
use crate::types::{PALETTE_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the scaled image inside a viewport, in terminal cells and
/// surface-equivalent pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start_x: u16,
    pub start_y: u16,
    /// Image width in cells (one pixel column per cell).
    pub cols: u16,
    /// Image height in pixel rows (two per cell).
    pub pixel_rows: u16,
}

impl Placement {
    /// Terminal rows covered by the image.
    pub fn rows(&self) -> u16 {
        self.pixel_rows.div_ceil(2)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SurfaceView {
    anchor_y: AnchorY,
    /// Colour behind the letterbox margins.
    border: Rgb,
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            border: Rgb::new(0, 0, 0),
        }
    }
}

impl SurfaceView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_border(mut self, border: Rgb) -> Self {
        self.border = border;
        self
    }

    /// Fit the surface into a viewport, never exceeding it on either axis.
    pub fn place(&self, viewport: Viewport) -> Placement {
        let sw = SCREEN_WIDTH as u32;
        let sh = SCREEN_HEIGHT as u32;
        let max_cols = viewport.width as u32;
        let max_rows = viewport.height as u32 * 2;

        // Width-limited if the viewport is relatively taller than the surface.
        let (cols, pixel_rows) = if max_cols * sh <= max_rows * sw {
            (max_cols, max_cols * sh / sw)
        } else {
            (max_rows * sw / sh, max_rows)
        };

        // Both are bounded by the viewport, but saturate rather than wrap.
        let cols = u16::try_from(cols).unwrap_or(u16::MAX);
        let pixel_rows = u16::try_from(pixel_rows).unwrap_or(u16::MAX);
        let rows = pixel_rows.div_ceil(2);

        let start_x = viewport.width.saturating_sub(cols) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(rows) / 2,
            AnchorY::Top => 0,
        };

        Placement {
            start_x,
            start_y,
            cols,
            pixel_rows,
        }
    }

    /// Render a surface into an existing grid.
    ///
    /// This is the allocation-free hot path. Callers can reuse a grid across
    /// frames; it only reallocates when the terminal grows.
    pub fn render_into(
        &self,
        surface: &Surface,
        palette: &Palette,
        viewport: Viewport,
        grid: &mut CellGrid,
    ) {
        grid.resize(viewport.width, viewport.height);
        grid.fill(PixelPair::solid(self.border));

        let p = self.place(viewport);
        if p.cols == 0 || p.pixel_rows == 0 {
            return;
        }

        let mut colors = [Rgb::default(); PALETTE_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = palette.rgb(i as u8).into();
        }

        let sample = |col: u16, pixel_row: u16| -> Rgb {
            let sx = col as u32 * SCREEN_WIDTH as u32 / p.cols as u32;
            let sy = pixel_row as u32 * SCREEN_HEIGHT as u32 / p.pixel_rows as u32;
            let index = surface.pixel(sx as i32, sy as i32).unwrap_or(0);
            colors[index as usize]
        };

        for cell_y in 0..p.rows() {
            let Some(row) = grid.row_mut(p.start_y + cell_y) else {
                break;
            };
            let upper_y = cell_y * 2;
            let lower_y = upper_y + 1;
            let cells = &mut row[p.start_x as usize..(p.start_x + p.cols) as usize];
            for (col, cell) in (0u16..).zip(cells.iter_mut()) {
                let upper = sample(col, upper_y);
                // An odd image height leaves the last lower half in the margin.
                let lower = if lower_y < p.pixel_rows {
                    sample(col, lower_y)
                } else {
                    self.border
                };
                *cell = PixelPair::new(upper, lower);
            }
        }
    }

    /// Convenience helper that allocates a new grid.
    pub fn render(&self, surface: &Surface, palette: &Palette, viewport: Viewport) -> CellGrid {
        let mut grid = CellGrid::new(viewport.width, viewport.height);
        self.render_into(surface, palette, viewport, &mut grid);
        grid
    }
}

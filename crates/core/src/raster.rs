//! Primitive rasterizer.
//!
//! Every higher-level drawing operation (cells, balls, glyphs) is a rectangle
//! fill or a single pixel. Clipping is the pixel writer's job, so rectangles
//! that hang off the surface are safe.

use crate::surface::Surface;

/// Something pixels can be written to.
pub trait Canvas {
    fn set_pixel(&mut self, x: i32, y: i32, color: u8);

    /// Reset every pixel to colour 0.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle. Last write wins, no blending.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        for yy in y..y.saturating_add(h) {
            for xx in x..x.saturating_add(w) {
                self.set_pixel(xx, yy, color);
            }
        }
    }
}

impl Canvas for Surface {
    fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        Surface::set_pixel(self, x, y, color);
    }

    fn clear(&mut self) {
        Surface::clear(self);
    }
}

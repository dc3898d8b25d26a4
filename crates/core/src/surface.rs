//! Surface module - the planar pixel buffer
//!
//! The surface is a 320x200, 4 bits per pixel image stored the way a planar
//! low-resolution framebuffer stores it: every 16-pixel horizontal group is
//! four consecutive 16-bit words, one per plane. Plane `p` holds bit `p` of
//! the colour index of each of the 16 pixels, leftmost pixel in bit 15.
//!
//! Words are big-endian so that raw planar data from image files can be copied
//! in byte-for-byte. All bit arithmetic lives here; the rest of the crate only
//! talks to the surface through [`Canvas`](crate::raster::Canvas).
//!
//! Word offset of pixel (x, y), plane p:
//!
//! ```text
//! y * WORDS_PER_LINE + (x / 16) * PLANES + p      bit 15 - (x % 16)
//! ```

use std::fmt;

use crate::types::{GROUP_PIXELS, PLANES, SCREEN_HEIGHT, SCREEN_WIDTH, SURFACE_BYTES, WORDS_PER_LINE};

/// A full display surface. Allocated once, never resized.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    bytes: Box<[u8]>,
}

impl Surface {
    /// Create a cleared surface (colour 0 everywhere).
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; SURFACE_BYTES].into_boxed_slice(),
        }
    }

    /// Map an in-bounds pixel to its plane-0 word index and bit mask.
    #[inline(always)]
    fn locate(x: i32, y: i32) -> Option<(usize, u16)> {
        if x < 0 || x >= SCREEN_WIDTH || y < 0 || y >= SCREEN_HEIGHT {
            return None;
        }
        let group = (x / GROUP_PIXELS) as usize;
        let bit = 15 - (x % GROUP_PIXELS) as u32;
        let word = (y as usize) * WORDS_PER_LINE + group * PLANES;
        Some((word, 1u16 << bit))
    }

    #[inline(always)]
    fn read_word(&self, index: usize) -> u16 {
        u16::from_be_bytes([self.bytes[2 * index], self.bytes[2 * index + 1]])
    }

    #[inline(always)]
    fn write_word(&mut self, index: usize, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.bytes[2 * index] = hi;
        self.bytes[2 * index + 1] = lo;
    }

    /// Write one pixel. Only the low 4 bits of `color` are used.
    ///
    /// Out-of-range coordinates are clipped silently. In range, exactly one
    /// bit in each of the four plane words changes; neighbouring pixels keep
    /// their bits.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        let Some((base, mask)) = Self::locate(x, y) else {
            return;
        };

        let bits = color & 0x0F;
        for plane in 0..PLANES {
            let word = self.read_word(base + plane);
            let word = if bits & (1 << plane) != 0 {
                word | mask
            } else {
                word & !mask
            };
            self.write_word(base + plane, word);
        }
    }

    /// Read a pixel's colour index back from the four planes.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        let (base, mask) = Self::locate(x, y)?;
        let mut color = 0u8;
        for plane in 0..PLANES {
            if self.read_word(base + plane) & mask != 0 {
                color |= 1 << plane;
            }
        }
        Some(color)
    }

    /// Raw plane word by index, `None` past the end.
    pub fn word(&self, index: usize) -> Option<u16> {
        if index < SURFACE_BYTES / 2 {
            Some(self.read_word(index))
        } else {
            None
        }
    }

    /// Zero every plane (background colour 0 everywhere).
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy raw planar data in. Data shorter than the surface leaves the tail
    /// untouched; anything past the surface size is ignored.
    pub fn load_raw(&mut self, raw: &[u8]) {
        let len = raw.len().min(SURFACE_BYTES);
        self.bytes[..len].copy_from_slice(&raw[..len]);
    }

    /// Present this surface: one bulk copy into `physical`.
    pub fn present_to(&self, physical: &mut Surface) {
        physical.bytes.copy_from_slice(&self.bytes);
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.bytes.iter().filter(|b| **b != 0).count();
        f.debug_struct("Surface")
            .field("bytes", &self.bytes.len())
            .field("nonzero", &lit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_word_and_bit() {
        assert_eq!(Surface::locate(0, 0), Some((0, 0x8000)));
        assert_eq!(Surface::locate(15, 0), Some((0, 0x0001)));
        assert_eq!(Surface::locate(16, 0), Some((4, 0x8000)));
        assert_eq!(Surface::locate(0, 1), Some((80, 0x8000)));
        assert_eq!(Surface::locate(319, 199), Some((199 * 80 + 19 * 4, 0x0001)));
        assert_eq!(Surface::locate(-1, 0), None);
        assert_eq!(Surface::locate(320, 0), None);
        assert_eq!(Surface::locate(0, 200), None);
    }

    #[test]
    fn test_set_pixel_touches_one_bit_per_plane() {
        let mut s = Surface::new();
        s.set_pixel(1, 0, 0b0101);

        assert_eq!(s.word(0), Some(0x4000));
        assert_eq!(s.word(1), Some(0x0000));
        assert_eq!(s.word(2), Some(0x4000));
        assert_eq!(s.word(3), Some(0x0000));

        // Big-endian storage.
        assert_eq!(s.as_bytes()[0], 0x40);
        assert_eq!(s.as_bytes()[1], 0x00);
    }

    #[test]
    fn test_overwrite_clears_stale_plane_bits() {
        let mut s = Surface::new();
        s.set_pixel(7, 3, 15);
        s.set_pixel(8, 3, 15);
        s.set_pixel(7, 3, 2);

        assert_eq!(s.pixel(7, 3), Some(2));
        assert_eq!(s.pixel(8, 3), Some(15));
    }

    #[test]
    fn test_out_of_range_write_is_ignored() {
        let mut s = Surface::new();
        s.set_pixel(-1, 5, 15);
        s.set_pixel(320, 5, 15);
        s.set_pixel(5, -1, 15);
        s.set_pixel(5, 200, 15);
        assert!(s.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_present_copies_everything() {
        let mut offscreen = Surface::new();
        let mut physical = Surface::new();
        offscreen.set_pixel(100, 100, 9);
        offscreen.present_to(&mut physical);
        assert_eq!(physical, offscreen);
    }
}

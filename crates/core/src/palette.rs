//! Colour table.
//!
//! Entries use the 9-bit hardware word layout `0000 0rrr 0ggg 0bbb`, which is
//! also how palettes are stored in PI1 image files.

use crate::types::{
    COLOR_BG, COLOR_TEXT, DAY_BALL_COLOR, DAY_COLOR, NIGHT_BALL_COLOR, NIGHT_COLOR, PALETTE_SIZE,
};

/// Pack 3-bit channels into a colour word.
pub const fn st_color(r: u16, g: u16, b: u16) -> u16 {
    ((r & 7) << 8) | ((g & 7) << 4) | (b & 7)
}

/// A 16-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    words: [u16; PALETTE_SIZE],
}

impl Palette {
    pub const fn from_words(words: [u16; PALETTE_SIZE]) -> Self {
        Self { words }
    }

    /// Parse 16 big-endian colour words. `None` if fewer than 32 bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < PALETTE_SIZE * 2 {
            return None;
        }
        let mut words = [0u16; PALETTE_SIZE];
        for (i, word) in words.iter_mut().enumerate() {
            *word = u16::from_be_bytes([bytes[2 * i], bytes[2 * i + 1]]);
        }
        Some(Self { words })
    }

    /// The power-on desktop palette. This is what a display shows before the
    /// game installs its own colours.
    pub const fn system() -> Self {
        Self::from_words([
            0x777, 0x700, 0x070, 0x770, 0x007, 0x707, 0x077, 0x555, 0x333, 0x733, 0x373, 0x773,
            0x337, 0x737, 0x377, 0x000,
        ])
    }

    /// The game scheme: light mint day, dark blue night, each ball in the
    /// opposing side's colour, white text, everything else dark teal.
    pub fn game() -> Self {
        let mut words = [st_color(0, 1, 1); PALETTE_SIZE];
        words[COLOR_BG as usize] = st_color(0, 1, 1);
        words[DAY_COLOR as usize] = st_color(6, 7, 6);
        words[NIGHT_COLOR as usize] = st_color(1, 2, 3);
        words[DAY_BALL_COLOR as usize] = st_color(1, 2, 3);
        words[NIGHT_BALL_COLOR as usize] = st_color(6, 7, 6);
        words[COLOR_TEXT as usize] = st_color(7, 7, 7);
        Self { words }
    }

    pub fn word(&self, index: u8) -> u16 {
        self.words[(index & 0x0F) as usize]
    }

    pub fn set(&mut self, index: u8, word: u16) {
        self.words[(index & 0x0F) as usize] = word;
    }

    pub fn words(&self) -> &[u16; PALETTE_SIZE] {
        &self.words
    }

    /// 24-bit colour for an index. Each 3-bit channel is scaled to 0..=255;
    /// any extended fourth channel bit is ignored.
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        let word = self.word(index);
        let expand = |shift: u16| -> u8 { (((word >> shift) & 7) * 255 / 7) as u8 };
        [expand(8), expand(4), expand(0)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::system()
    }
}

//! Score counters drawn with a 5x7 digit font.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::raster::Canvas;
use crate::types::{
    COLOR_BG, COLOR_TEXT, DIGIT_HEIGHT, DIGIT_WIDTH, LEFT_SCORE_X, RIGHT_SCORE_X, SCORE_CENTER_Y,
};

/// Digit glyphs, one byte per row, bit 4 is the leftmost column.
pub const DIGIT_FONT: [[u8; DIGIT_HEIGHT as usize]; 10] = [
    [0x1E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x1E],
    [0x04, 0x0C, 0x14, 0x04, 0x04, 0x04, 0x1F],
    [0x1E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
    [0x1E, 0x11, 0x01, 0x0E, 0x01, 0x11, 0x1E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x1E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x1E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x1E, 0x11, 0x11, 0x1F, 0x01, 0x02, 0x0C],
];

/// Decimal digits of `value`, most significant first. Zero and negative
/// values both come out as a single 0.
pub fn decimal_digits(value: i64) -> ArrayVec<u8, 20> {
    let mut digits = ArrayVec::new();
    if value <= 0 {
        digits.push(0);
        return digits;
    }

    let mut v = value;
    while v > 0 {
        digits.push((v % 10) as u8);
        v /= 10;
    }
    digits.reverse();
    digits
}

/// Pixel width of `len` glyphs with 1 pixel gaps.
pub fn text_width(len: usize) -> i32 {
    len as i32 * (DIGIT_WIDTH + 1) - 1
}

/// Plot the set bits of one glyph. Unset bits are left alone.
pub fn draw_digit<C: Canvas>(canvas: &mut C, x: i32, y: i32, digit: u8, color: u8) {
    let Some(glyph) = DIGIT_FONT.get(digit as usize) else {
        return;
    };

    for (dy, row) in glyph.iter().enumerate() {
        for dx in 0..DIGIT_WIDTH {
            let bit = 1u8 << (DIGIT_WIDTH - 1 - dx);
            if row & bit != 0 {
                canvas.set_pixel(x + dx, y + dy as i32, color);
            }
        }
    }
}

/// Draw a number with its left edge at `x`, vertically centred on `center_y`.
///
/// The background box behind exactly the digits drawn is cleared first.
pub fn draw_number<C: Canvas>(canvas: &mut C, x: i32, center_y: i32, value: i64) {
    let digits = decimal_digits(value);
    let top_y = center_y - DIGIT_HEIGHT / 2;

    canvas.fill_rect(x, top_y, text_width(digits.len()), DIGIT_HEIGHT, COLOR_BG);

    let mut cx = x;
    for d in digits {
        draw_digit(canvas, cx, top_y, d, COLOR_TEXT);
        cx += DIGIT_WIDTH + 1;
    }
}

/// Draw both counters: day on the left margin, night on the right.
pub fn draw_counters<C: Canvas>(canvas: &mut C, board: &Board) {
    draw_number(canvas, LEFT_SCORE_X, SCORE_CENTER_Y, board.day_score() as i64);
    draw_number(canvas, RIGHT_SCORE_X, SCORE_CENTER_Y, board.night_score() as i64);
}

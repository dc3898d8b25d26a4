//! Pixel plane codec tests.

use proptest::prelude::*;

use pong_wars::core::{Canvas, Surface};
use pong_wars::types::{SCREEN_HEIGHT, SCREEN_WIDTH, SURFACE_BYTES, WORDS_PER_LINE};

#[test]
fn test_surface_size_matches_layout() {
    let s = Surface::new();
    assert_eq!(s.as_bytes().len(), SURFACE_BYTES);
    assert_eq!(SURFACE_BYTES, (320 / 16) * 4 * 200 * 2);
}

#[test]
fn test_plane_words_for_white_pixel() {
    let mut s = Surface::new();
    // x = 37: group 2, bit 15 - 5 = 10.
    s.set_pixel(37, 2, 15);
    let base = 2 * WORDS_PER_LINE + 2 * 4;
    for plane in 0..4 {
        assert_eq!(s.word(base + plane), Some(1 << 10), "plane {}", plane);
    }
    assert_eq!(s.word(base + 4), Some(0));
    assert_eq!(s.word(base - 1), Some(0));
}

#[test]
fn test_each_plane_carries_one_color_bit() {
    let mut s = Surface::new();
    for color in 0..16u8 {
        s.set_pixel(0, 0, color);
        for plane in 0..4 {
            let expected = if color & (1 << plane) != 0 { 0x8000 } else { 0 };
            assert_eq!(s.word(plane), Some(expected), "color {} plane {}", color, plane);
        }
    }
}

#[test]
fn test_word_past_end_is_none() {
    let s = Surface::new();
    assert_eq!(s.word(SURFACE_BYTES / 2 - 1), Some(0));
    assert_eq!(s.word(SURFACE_BYTES / 2), None);
}

#[test]
fn test_load_raw_copies_bytes_verbatim() {
    let mut raw = vec![0u8; SURFACE_BYTES];
    raw[0] = 0x80; // plane 0 word of pixel (0, 0)
    raw[3] = 0x01; // plane 1 word, last bit: pixel (15, 0)
    let mut s = Surface::new();
    s.load_raw(&raw);
    assert_eq!(s.pixel(0, 0), Some(1));
    assert_eq!(s.pixel(15, 0), Some(2));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn pixel_round_trips(
        x in 0..SCREEN_WIDTH,
        y in 0..SCREEN_HEIGHT,
        color in 0u8..16,
        background in 0u8..16,
    ) {
        let mut s = Surface::new();
        s.fill_rect(x - 1, y - 1, 3, 3, background);
        s.set_pixel(x, y, color);

        prop_assert_eq!(s.pixel(x, y), Some(color));
        // Neighbours keep the background.
        if x > 0 {
            prop_assert_eq!(s.pixel(x - 1, y), Some(background));
        }
        if x + 1 < SCREEN_WIDTH {
            prop_assert_eq!(s.pixel(x + 1, y), Some(background));
        }
    }

    #[test]
    fn out_of_bounds_writes_change_nothing(
        seeds in proptest::collection::vec((0..SCREEN_WIDTH, 0..SCREEN_HEIGHT, 0u8..16), 1..50),
        x in prop_oneof![-64..0i32, SCREEN_WIDTH..SCREEN_WIDTH + 64],
        y in -64..SCREEN_HEIGHT + 64,
        color in 0u8..16,
    ) {
        let mut s = Surface::new();
        for (sx, sy, c) in seeds {
            s.set_pixel(sx, sy, c);
        }
        let before = s.clone();

        s.set_pixel(x, y, color);
        s.set_pixel(y.rem_euclid(SCREEN_WIDTH), -1 - y.abs(), color);

        prop_assert_eq!(s, before);
    }
}

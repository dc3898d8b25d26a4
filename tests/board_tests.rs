//! Territory grid tests.

use proptest::prelude::*;

use pong_wars::core::{Board, PaintOutcome, Surface};
use pong_wars::types::{Owner, DAY_COLOR, GAME_LEFT, GAME_TOP, GRID_SIZE, NIGHT_COLOR, SQUARE_SIZE};

#[test]
fn test_board_new_is_split_down_the_middle() {
    let board = Board::new();

    for gy in 0..GRID_SIZE as i32 {
        for gx in 0..GRID_SIZE as i32 {
            let expected = if gx < 5 { Owner::Day } else { Owner::Night };
            assert_eq!(board.get(gx, gy), Some(expected), "cell ({}, {})", gx, gy);
        }
    }
    assert_eq!(board.day_score(), 50);
    assert_eq!(board.night_score(), 50);
    assert!(board.is_dirty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(GRID_SIZE as i32, 0), None);
    assert_eq!(board.get(0, GRID_SIZE as i32), None);
}

#[test]
fn test_single_capture_takes_the_last_cell() {
    let mut rows = [[Owner::Day; GRID_SIZE]; GRID_SIZE];
    rows[0][0] = Owner::Night;
    let mut board = Board::from_rows(rows);
    board.clear_dirty();
    assert_eq!((board.day_score(), board.night_score()), (99, 1));

    let mut surface = Surface::new();
    let outcome = board.paint_cell(&mut surface, 0, 0, Owner::Day);

    assert_eq!(outcome, PaintOutcome::Captured { previous: Owner::Night });
    assert_eq!((board.day_score(), board.night_score()), (100, 0));
    assert!(board.is_dirty());

    // The whole cell was repainted in the day colour.
    for y in GAME_TOP..GAME_TOP + SQUARE_SIZE {
        for x in GAME_LEFT..GAME_LEFT + SQUARE_SIZE {
            assert_eq!(surface.pixel(x, y), Some(DAY_COLOR));
        }
    }
    assert_eq!(surface.pixel(GAME_LEFT + SQUARE_SIZE, GAME_TOP), Some(0));
}

#[test]
fn test_repaint_with_same_owner_is_a_no_op() {
    let mut board = Board::new();
    board.clear_dirty();
    let mut surface = Surface::new();

    for _ in 0..10 {
        assert_eq!(board.paint_cell(&mut surface, 2, 3, Owner::Day), PaintOutcome::Unchanged);
    }

    assert_eq!((board.day_score(), board.night_score()), (50, 50));
    assert!(!board.is_dirty());
    assert_eq!(surface, Surface::new());
}

#[test]
fn test_capture_then_repaint_moves_scores_once() {
    let mut board = Board::new();
    board.clear_dirty();
    let mut surface = Surface::new();

    let first = board.paint_cell(&mut surface, 7, 4, Owner::Day);
    assert_eq!(first, PaintOutcome::Captured { previous: Owner::Night });
    assert_eq!((board.day_score(), board.night_score()), (51, 49));
    assert!(board.is_dirty());

    board.clear_dirty();
    let painted = surface.clone();

    let second = board.paint_cell(&mut surface, 7, 4, Owner::Day);
    assert_eq!(second, PaintOutcome::Unchanged);
    assert_eq!((board.day_score(), board.night_score()), (51, 49));
    assert!(!board.is_dirty());
    assert_eq!(surface, painted);
}

#[test]
fn test_paint_off_grid_is_ignored() {
    let mut board = Board::new();
    board.clear_dirty();
    let mut surface = Surface::new();

    assert_eq!(board.paint_cell(&mut surface, -1, 0, Owner::Night), PaintOutcome::OutOfBounds);
    assert_eq!(board.paint_cell(&mut surface, 0, 10, Owner::Night), PaintOutcome::OutOfBounds);
    assert_eq!((board.day_score(), board.night_score()), (50, 50));
    assert!(!board.is_dirty());
}

#[test]
fn test_draw_all_paints_both_halves() {
    let board = Board::new();
    let mut surface = Surface::new();
    board.draw_all(&mut surface);

    assert_eq!(surface.pixel(GAME_LEFT, GAME_TOP), Some(DAY_COLOR));
    assert_eq!(surface.pixel(GAME_LEFT + 99, 199), Some(DAY_COLOR));
    assert_eq!(surface.pixel(GAME_LEFT + 100, 0), Some(NIGHT_COLOR));
    assert_eq!(surface.pixel(GAME_LEFT + 199, 199), Some(NIGHT_COLOR));
    // Margins stay background.
    assert_eq!(surface.pixel(GAME_LEFT - 1, 50), Some(0));
    assert_eq!(surface.pixel(GAME_LEFT + 200, 50), Some(0));
}

#[test]
fn test_init_restores_the_split() {
    let mut board = Board::new();
    let mut surface = Surface::new();
    board.paint_cell(&mut surface, 9, 9, Owner::Day);
    board.clear_dirty();

    board.init();
    assert_eq!(board.get(9, 9), Some(Owner::Night));
    assert_eq!((board.day_score(), board.night_score()), (50, 50));
    assert!(board.is_dirty());
}

fn owner_strategy() -> impl Strategy<Value = Owner> {
    prop_oneof![Just(Owner::Day), Just(Owner::Night)]
}

proptest! {
    #[test]
    fn scores_always_match_the_grid(
        paints in proptest::collection::vec((-2..12i32, -2..12i32, owner_strategy()), 0..200),
    ) {
        let mut board = Board::new();
        let mut surface = Surface::new();

        for (gx, gy, owner) in paints {
            board.paint_cell(&mut surface, gx, gy, owner);

            prop_assert_eq!(board.day_score() + board.night_score(), 100);
            prop_assert_eq!(board.day_score(), board.count(Owner::Day));
            prop_assert_eq!(board.night_score(), board.count(Owner::Night));
        }
    }
}

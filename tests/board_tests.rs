//! Board tests - selection and pair-resolution invariants

use tui_memory::core::{Board, SimpleRng};
use tui_memory::types::{GameConfig, Point, Rgb};

const BLUE: Rgb = Rgb::new(0, 0, 255);
const GREEN: Rgb = Rgb::new(0, 255, 0);

/// A 1x4 board with two colors: two Blue tiles and two Green tiles at four
/// distinct positions (layout shuffled by the seed).
fn small_config() -> GameConfig {
    GameConfig {
        rows: 1,
        cols: 4,
        palette: vec![BLUE, GREEN],
        ..GameConfig::default()
    }
}

fn small_board(seed: u32) -> (GameConfig, Board) {
    let cfg = small_config();
    let board = Board::new(&cfg, &mut SimpleRng::new(seed));
    (cfg, board)
}

fn center(board: &Board, idx: usize) -> Point {
    let t = &board.tiles()[idx];
    t.pos().offset(t.width() / 2.0, t.height() / 2.0)
}

fn click(board: &mut Board, idx: usize) -> bool {
    let p = center(board, idx);
    board.handle_select(p)
}

/// Run updates long enough for any flip, fade, and unflip delay to finish.
fn settle(board: &mut Board, cfg: &GameConfig) {
    for _ in 0..300 {
        board.update(0.016, cfg);
    }
}

/// First two live tiles with equal fronts.
fn find_pair(board: &Board) -> (usize, usize) {
    let tiles = board.tiles();
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i].front() == tiles[j].front() {
                return (i, j);
            }
        }
    }
    panic!("no pair on board");
}

/// First two live tiles with different fronts.
fn find_mismatch(board: &Board) -> (usize, usize) {
    let tiles = board.tiles();
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i].front() != tiles[j].front() {
                return (i, j);
            }
        }
    }
    panic!("no mismatch on board");
}

#[test]
fn test_selection_never_exceeds_two() {
    let (_cfg, mut board) = small_board(1);

    assert!(click(&mut board, 0));
    assert!(click(&mut board, 1));
    assert_eq!(board.selection().len(), 2);

    // Third click while two are selected is a no-op.
    assert!(!click(&mut board, 2));
    assert_eq!(board.selection().len(), 2);
    assert!(board.tiles()[2].is_closed());
}

#[test]
fn test_matched_pair_fades_and_is_removed() {
    let (cfg, mut board) = small_board(3);
    let (a, b) = find_pair(&board);

    assert!(click(&mut board, a));
    assert!(click(&mut board, b));
    settle(&mut board, &cfg);

    assert_eq!(board.live_count(), 2);
    assert_eq!(board.lives(), 3, "a match never costs a life");
    assert!(board.selection().is_empty());
    assert!(!board.is_won());
    assert!(!board.is_lost());
}

#[test]
fn test_clearing_every_pair_wins() {
    let (cfg, mut board) = small_board(5);

    while !board.is_won() {
        let (a, b) = find_pair(&board);
        assert!(click(&mut board, a));
        assert!(click(&mut board, b));
        settle(&mut board, &cfg);
    }

    assert_eq!(board.live_count(), 0);
    assert_eq!(board.lives(), 3);
    assert!(!board.is_lost(), "won and lost are mutually exclusive");
}

#[test]
fn test_mismatch_flips_back_and_costs_a_life() {
    let (cfg, mut board) = small_board(7);
    let (a, b) = find_mismatch(&board);

    assert!(click(&mut board, a));
    assert!(click(&mut board, b));
    settle(&mut board, &cfg);

    assert_eq!(board.live_count(), 4, "mismatched tiles are never removed");
    assert_eq!(board.lives(), 2);
    assert!(board.selection().is_empty());
    assert!(board.tiles().iter().all(|t| t.is_closed()));
}

#[test]
fn test_mismatch_with_one_life_loses() {
    let cfg = GameConfig {
        starting_lives: 1,
        ..small_config()
    };
    let mut board = Board::new(&cfg, &mut SimpleRng::new(11));
    let (a, b) = find_mismatch(&board);

    assert!(click(&mut board, a));
    assert!(click(&mut board, b));
    settle(&mut board, &cfg);

    assert_eq!(board.lives(), 0);
    assert!(board.is_lost());
    assert!(!board.is_won());
    assert_eq!(board.live_count(), 4, "tiles remain on a lost board");
}

#[test]
fn test_open_tile_cannot_be_reselected() {
    let (cfg, mut board) = small_board(13);

    assert!(click(&mut board, 0));
    settle(&mut board, &cfg); // tile 0 settles fully open, still selected
    assert!(board.tiles()[0].is_open());
    assert_eq!(board.selection().len(), 1);

    assert!(!click(&mut board, 0));
    assert_eq!(board.selection().len(), 1);
}

#[test]
fn test_click_ignored_while_flipping_back() {
    let (cfg, mut board) = small_board(17);
    let (a, b) = find_mismatch(&board);

    click(&mut board, a);
    click(&mut board, b);

    // Advance until the mismatch resolves: selection clears while both
    // tiles are still animating closed.
    for _ in 0..300 {
        board.update(0.016, &cfg);
        if board.selection().is_empty() {
            break;
        }
    }
    assert!(board.selection().is_empty());
    assert!(board.tiles()[a].is_flipping());

    // A rapid click against the closing tile must not re-open it.
    assert!(!click(&mut board, a));
    assert!(board.selection().is_empty());

    settle(&mut board, &cfg);
    assert!(board.tiles()[a].is_closed());
}

#[test]
fn test_click_ignored_while_flipping_open() {
    let (_cfg, mut board) = small_board(19);

    assert!(click(&mut board, 0));
    // Tile 0 is now mid-flip; clicking it again selects nothing.
    assert!(!click(&mut board, 0));
    assert_eq!(board.selection().len(), 1);
}

#[test]
fn test_one_click_selects_at_most_one_tile() {
    let (_cfg, mut board) = small_board(23);

    // Click squarely on tile 1; only tile 1 opens.
    assert!(click(&mut board, 1));
    let opening = board.tiles().iter().filter(|t| !t.is_closed()).count();
    assert_eq!(opening, 1);
}

#[test]
fn test_animation_bounds_hold_across_a_full_round() {
    let (cfg, mut board) = small_board(29);

    while !board.is_won() {
        let (a, b) = find_pair(&board);
        click(&mut board, a);
        click(&mut board, b);
        for _ in 0..300 {
            board.update(0.016, &cfg);
            for t in board.tiles() {
                assert!((-1.0..=1.0).contains(&t.scale()));
                assert!((0.0..=1.0).contains(&t.alpha()));
            }
        }
    }
}

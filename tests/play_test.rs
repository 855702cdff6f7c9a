//! Game-loop runs with scripted input and a captured screen.

use std::io::Cursor;
use termtac::tui::{BoardView, Markers, TermScreen, play};
use termtac::{Game, Player};

fn run_scripted(first: Player, input: &str) -> String {
    let mut out = Vec::new();
    let view = BoardView::new(
        Cursor::new(input.to_string()),
        TermScreen::new(&mut out),
        Markers::default(),
    );
    play(Game::new(first), view).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_scripted_win_reports_player_one() {
    let output = run_scripted(Player::One, "1\n4\n2\n5\n3\n");
    assert!(output.contains("PLAYER 1 WON!"));
}

#[test]
fn test_scripted_win_reports_player_two() {
    // Player 2 starts and takes the main diagonal.
    let output = run_scripted(Player::Two, "1\n3\n5\n4\n9\n");
    assert!(output.contains("PLAYER 2 WON!"));
}

#[test]
fn test_scripted_draw() {
    let output = run_scripted(Player::One, "1\n2\n3\n4\n5\n7\n6\n9\n8\n");
    assert!(output.contains("DRAW!"));
}

#[test]
fn test_rejected_moves_do_not_advance_the_turn() {
    // Player 2's occupied and garbage entries are re-prompted; the top
    // row still belongs to player 1 at the end.
    let output = run_scripted(Player::One, "1\n1\nabc\n4\n2\n5\n3\n");
    assert!(output.contains("PLAYER 1 WON!"));
    assert!(!output.contains("PLAYER 2 WON!"));
}

#[test]
fn test_out_of_range_entry_is_re_prompted() {
    let output = run_scripted(Player::One, "0\n10\n1\n4\n2\n5\n3\n");
    assert!(output.contains("PLAYER 1 WON!"));
}

#[test]
fn test_input_ending_mid_game_is_an_error() {
    let mut out = Vec::new();
    let view = BoardView::new(
        Cursor::new("1\n".to_string()),
        TermScreen::new(&mut out),
        Markers::default(),
    );

    assert!(play(Game::new(Player::One), view).is_err());
}

#[test]
fn test_final_board_shows_every_mark() {
    let output = run_scripted(Player::One, "1\n4\n2\n5\n3\n");
    // Last frame: x x x / o o - / - - -
    assert!(output.contains("x x x "));
    assert!(output.contains("o o - "));
}

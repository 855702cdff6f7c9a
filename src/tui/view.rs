//! In-place board rendering and move prompting.

use super::screen::Screen;
use crate::game::{GameStatus, Player, Square};
use anyhow::{Result, bail};
use std::io::BufRead;
use tracing::warn;

/// Index returned for unparseable input; rejected by every board.
pub const INVALID_MOVE: i32 = -1;

/// Placeholder drawn for empty squares.
pub const EMPTY_MARKER: char = '-';

/// Left indent for each board row.
const INDENT: &str = "        ";

/// Lines a move prompt occupies: spacer, prompt, spacer, typed entry.
const PROMPT_LINES: usize = 4;

/// Marker characters for the two players.
#[derive(Debug, Clone, Copy)]
pub struct Markers {
    one: char,
    two: char,
}

impl Markers {
    /// Creates a marker pair.
    pub fn new(one: char, two: char) -> Self {
        Self { one, two }
    }

    /// Marker for the given player.
    pub fn for_player(&self, player: Player) -> char {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Marker for a square, with the placeholder for empty squares.
    pub fn for_square(&self, square: Square) -> char {
        match square {
            Square::Empty => EMPTY_MARKER,
            Square::Occupied(player) => self.for_player(player),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new('x', 'o')
    }
}

/// Renders the grid in place and reads moves from an input line source.
///
/// The view counts every line it has written since the last full
/// redraw so the next frame can erase exactly that many lines with
/// cursor-up and clear-line commands.
pub struct BoardView<R, S> {
    input: R,
    screen: S,
    markers: Markers,
    lines_drawn: usize,
}

impl<R: BufRead, S: Screen> BoardView<R, S> {
    /// Creates a view over the given input source and screen.
    pub fn new(input: R, screen: S, markers: Markers) -> Self {
        Self {
            input,
            screen,
            markers,
            lines_drawn: 0,
        }
    }

    /// Erases the previous frame and redraws the grid.
    pub fn render(&mut self, cells: &[Square; 9]) -> Result<()> {
        self.erase_frame()?;

        for row in cells.chunks(3) {
            let mut line = String::from(INDENT);
            for &square in row {
                line.push(self.markers.for_square(square));
                line.push(' ');
            }
            self.screen.print_line(&line)?;
            self.lines_drawn += 1;
        }

        self.screen.flush()?;
        Ok(())
    }

    /// Prompts the player for a move and reads one input line.
    ///
    /// Returns the typed number shifted to the board's 0-8 indexing,
    /// or [`INVALID_MOVE`] when the line does not parse as an integer.
    /// A closed input source is an error: the game cannot continue
    /// without moves.
    pub fn prompt_move(&mut self, player: Player) -> Result<i32> {
        let marker = self.markers.for_player(player);
        self.screen.print_line("")?;
        self.screen
            .print_line(&format!("{marker} - Choose your play (from 1 to 9): "))?;
        self.screen.print_line("")?;
        self.screen.flush()?;
        self.lines_drawn += PROMPT_LINES;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("standard input closed before the game finished");
        }
        Ok(parse_move(&line))
    }

    /// Erases the prompt block after a rejected move, leaving the
    /// board in place.
    pub fn clear_prompt(&mut self) -> Result<()> {
        let lines = PROMPT_LINES.min(self.lines_drawn);
        for _ in 0..lines {
            self.screen.move_up()?;
            self.screen.clear_line()?;
        }
        self.lines_drawn -= lines;
        self.screen.flush()?;
        Ok(())
    }

    /// Prints the end-of-game message.
    pub fn report_result(&mut self, status: GameStatus) -> Result<()> {
        self.screen.print_line("")?;
        match status {
            GameStatus::Won(player) => {
                self.screen
                    .print_line(&format!("PLAYER {} WON!", player.number()))?;
            }
            GameStatus::Draw => self.screen.print_line("DRAW!")?,
            GameStatus::InProgress => {
                warn!("result requested while the game is still in progress");
            }
        }
        self.screen.print_line("")?;
        self.screen.flush()?;
        Ok(())
    }

    fn erase_frame(&mut self) -> Result<()> {
        for _ in 0..self.lines_drawn {
            self.screen.move_up()?;
            self.screen.clear_line()?;
        }
        self.lines_drawn = 0;
        Ok(())
    }
}

/// Maps a typed line to a board index: "1" through "9" become 0-8,
/// anything unparseable becomes [`INVALID_MOVE`].
fn parse_move(line: &str) -> i32 {
    line.trim()
        .parse::<i32>()
        .map(|n| n - 1)
        .unwrap_or(INVALID_MOVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Screen for &mut Recorder {
        fn move_up(&mut self) -> io::Result<()> {
            self.ops.push("<up>".into());
            Ok(())
        }

        fn clear_line(&mut self) -> io::Result<()> {
            self.ops.push("<clear>".into());
            Ok(())
        }

        fn print_line(&mut self, text: &str) -> io::Result<()> {
            self.ops.push(text.to_string());
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_move_shifts_to_internal_indexing() {
        assert_eq!(parse_move("1\n"), 0);
        assert_eq!(parse_move(" 9 \n"), 8);
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move("abc\n"), INVALID_MOVE);
        assert_eq!(parse_move("\n"), INVALID_MOVE);
        assert_eq!(parse_move("99999999999\n"), INVALID_MOVE);
    }

    #[test]
    fn test_parse_move_keeps_out_of_range_numbers() {
        // play_at does the range check; 0 becomes -1, 10 becomes 9.
        assert_eq!(parse_move("0\n"), -1);
        assert_eq!(parse_move("10\n"), 9);
    }

    #[test]
    fn test_render_draws_markers_and_placeholder() {
        let mut recorder = Recorder::default();
        let mut view = BoardView::new(Cursor::new(""), &mut recorder, Markers::default());

        let mut cells = [Square::Empty; 9];
        cells[0] = Square::Occupied(Player::One);
        cells[4] = Square::Occupied(Player::Two);
        view.render(&cells).unwrap();

        drop(view);
        assert_eq!(recorder.ops[0], format!("{INDENT}x - - "));
        assert_eq!(recorder.ops[1], format!("{INDENT}- o - "));
        assert_eq!(recorder.ops[2], format!("{INDENT}- - - "));
    }

    #[test]
    fn test_second_render_erases_board_and_prompt() {
        let mut recorder = Recorder::default();
        let mut view = BoardView::new(Cursor::new("5\n"), &mut recorder, Markers::default());

        let cells = [Square::Empty; 9];
        view.render(&cells).unwrap();
        assert_eq!(view.prompt_move(Player::One).unwrap(), 4);
        view.render(&cells).unwrap();

        drop(view);
        // 3 board rows + 4 prompt lines erased before the second frame.
        let ups = recorder.ops.iter().filter(|op| *op == "<up>").count();
        assert_eq!(ups, 7);
    }

    #[test]
    fn test_clear_prompt_leaves_board_lines() {
        let mut recorder = Recorder::default();
        let mut view = BoardView::new(Cursor::new("abc\n"), &mut recorder, Markers::default());

        let cells = [Square::Empty; 9];
        view.render(&cells).unwrap();
        assert_eq!(view.prompt_move(Player::One).unwrap(), INVALID_MOVE);
        view.clear_prompt().unwrap();
        view.render(&cells).unwrap();

        drop(view);
        // 4 prompt lines, then the 3 board rows on the next frame.
        let ups = recorder.ops.iter().filter(|op| *op == "<up>").count();
        assert_eq!(ups, 7);
    }

    #[test]
    fn test_prompt_names_the_player_marker() {
        let mut recorder = Recorder::default();
        let mut view = BoardView::new(Cursor::new("3\n"), &mut recorder, Markers::new('#', '@'));

        view.prompt_move(Player::Two).unwrap();

        drop(view);
        assert!(
            recorder
                .ops
                .iter()
                .any(|op| op.contains("@ - Choose your play (from 1 to 9): "))
        );
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut recorder = Recorder::default();
        let mut view = BoardView::new(Cursor::new(""), &mut recorder, Markers::default());

        assert!(view.prompt_move(Player::One).is_err());
    }

    #[test]
    fn test_report_result_messages() {
        let mut recorder = Recorder::default();
        let mut view = BoardView::new(Cursor::new(""), &mut recorder, Markers::default());

        view.report_result(GameStatus::Won(Player::Two)).unwrap();
        view.report_result(GameStatus::Draw).unwrap();

        drop(view);
        assert!(recorder.ops.iter().any(|op| op == "PLAYER 2 WON!"));
        assert!(recorder.ops.iter().any(|op| op == "DRAW!"));
    }
}

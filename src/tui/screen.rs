//! Cursor-control surface the view draws through.

use crossterm::{QueueableCommand, cursor, terminal};
use std::io::{self, Stdout, Write};

/// Minimal terminal capability needed to redraw the board in place.
///
/// The production implementation queues crossterm commands over a
/// writer; tests swap in a recording implementation so rendering runs
/// without a real terminal.
pub trait Screen {
    /// Moves the cursor up one line.
    fn move_up(&mut self) -> io::Result<()>;

    /// Clears the current line and returns the cursor to column 0.
    fn clear_line(&mut self) -> io::Result<()>;

    /// Writes text followed by a newline.
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Flushes queued output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Screen backed by any writer, normally standard output.
pub struct TermScreen<W: Write> {
    out: W,
}

impl TermScreen<Stdout> {
    /// Creates a screen over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TermScreen<W> {
    /// Creates a screen over the given writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for TermScreen<W> {
    fn move_up(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveUp(1))?;
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.out
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?
            .queue(cursor::MoveToColumn(0))?;
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

//! Terminal control for frame playback.
//!
//! Everything here is plain escape sequences queued through crossterm, so
//! any `io::Write` works as a target, including a `Vec<u8>` in tests.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Print, ResetColor},
    terminal::{Clear, ClearType},
};

/// Hide the cursor.
pub fn hide_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Hide)
}

/// Show the cursor.
pub fn show_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Show)
}

/// Clear the whole screen and move the cursor to the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Reset colours and text attributes.
pub fn reset_attributes<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, ResetColor)
}

/// Best-effort restore used on interrupt: cursor visible, attributes reset.
///
/// Show-cursor and reset are always the last bytes written.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    show_cursor(out)?;
    reset_attributes(out)?;
    out.flush()
}

/// A terminal in playback mode.
///
/// The cursor is hidden and the screen cleared on creation. Dropping the
/// screen shows the cursor again, on normal return and on error paths alike.
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        hide_cursor(&mut out)?;
        clear_screen(&mut out)?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Replace the screen contents with `frame`.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        clear_screen(&mut self.out)?;
        queue!(self.out, Print(frame))?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = show_cursor(&mut self.out);
        let _ = self.out.flush();
    }
}

use crate::ansi::SHOW_CURSOR;
use crate::error::Result;
use log::warn;
use std::io::Write;

/// Owns the output while the cursor is hidden.
///
/// The cursor is shown again exactly once: either by an explicit
/// [`HiddenCursor::restore`] or when the guard is dropped.
pub struct HiddenCursor<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> HiddenCursor<W> {
    /// Take over `out`, whose cursor has already been hidden
    pub fn new(out: W) -> Self {
        Self {
            out,
            restored: false,
        }
    }

    /// Show the cursor and move to a fresh line. Later calls do nothing.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        writeln!(self.out, "{}", SHOW_CURSOR)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to show cursor: {}", err);
        }
    }
}

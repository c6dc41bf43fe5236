use crate::ansi::{CLEAR_SCREEN, CURSOR_HOME, HIDE_CURSOR};
use crate::backend::{Backend, SizeSource};
use crate::cursor::HiddenCursor;
use crate::dimensions::Dimensions;
use crate::error::Result;
use crate::layout::center;
use std::fmt::Write;
use std::io;

/// Draws a single centered line onto a terminal.
///
/// Output is assembled in an internal buffer and handed to the sink in one
/// write, then flushed.
pub struct Screen<W: io::Write, S: SizeSource = Backend> {
    out: W,
    size: S,
    buffer: String,
}

impl Screen<io::Stdout, Backend> {
    /// Screen drawing to stdout, sized by the real terminal
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Backend)
    }
}

impl<W: io::Write, S: SizeSource> Screen<W, S> {
    pub fn new(out: W, size: S) -> Self {
        Self {
            out,
            size,
            buffer: String::new(),
        }
    }

    /// Current size, or the 80x24 default when it can't be determined
    pub fn get_size(&self) -> Dimensions {
        Dimensions::query_or_default(&self.size)
    }

    /// Clear the screen and draw `text` in the middle, leaving the cursor hidden
    pub fn render_centered(&mut self, text: &str) -> Result<()> {
        let dims = self.get_size();
        self.compose(dims, text)?;
        self.refresh()
    }

    /// Render `text` and hand the sink to a guard that shows the cursor again
    pub fn present(mut self, text: &str) -> Result<HiddenCursor<W>> {
        self.render_centered(text)?;
        Ok(HiddenCursor::new(self.out))
    }

    fn compose(&mut self, dims: Dimensions, text: &str) -> Result<()> {
        self.buffer.clear();
        write!(self.buffer, "{}{}", CLEAR_SCREEN, CURSOR_HOME)?;
        for _ in 0..dims.top_padding() {
            self.buffer.push('\n');
        }
        writeln!(self.buffer, "{}", center(text, dims.columns as usize))?;
        write!(self.buffer, "{}", HIDE_CURSOR)?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.out.write_all(self.buffer.as_bytes())?;
        self.out.flush()?;
        self.buffer.clear();
        Ok(())
    }
}

use crate::backend::SizeSource;
use crate::error::Result;
use crate::idle::wait_until_interrupted;
use crate::screen::Screen;
use crate::signal::Interrupt;
use log::debug;
use std::io::Write;
use std::time::Duration;

/// The fixed title shown on screen
pub const DISPLAY_TEXT: &str = "Simpsons TV";

/// Draw `text`, idle until `interrupt` is raised, then show the cursor again.
pub fn run<W: Write, S: SizeSource>(
    screen: Screen<W, S>,
    text: &str,
    interrupt: &Interrupt,
    interval: Duration,
) -> Result<()> {
    let mut cursor = screen.present(text)?;
    let ticks = wait_until_interrupted(interrupt, interval);
    debug!("interrupted after {} idle ticks", ticks);
    cursor.restore()
}

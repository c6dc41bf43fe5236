//! Simpsons TV - a title card for the terminal
//!
//! Clears the terminal, prints a single line centered in the window, hides
//! the cursor and waits for an interrupt before showing the cursor again.
//!
//! # Example
//! ```no_run
//! use simpsons_tv::{DISPLAY_TEXT, IDLE_INTERVAL, Interrupt, Screen};
//!
//! let interrupt = Interrupt::install()?;
//! simpsons_tv::run(Screen::stdout(), DISPLAY_TEXT, &interrupt, IDLE_INTERVAL)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ansi;
mod app;
mod backend;
mod cursor;
mod dimensions;
mod error;
pub mod idle;
mod layout;
mod screen;
mod signal;

pub use app::{DISPLAY_TEXT, run};
pub use backend::{Backend, SizeSource};
pub use cursor::HiddenCursor;
pub use dimensions::Dimensions;
pub use error::{Error, Result};
pub use idle::IDLE_INTERVAL;
pub use layout::center;
pub use screen::Screen;
pub use signal::Interrupt;

use std::fmt;
use std::io;

/// Result type for simpsons-tv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying or drawing to the terminal
#[derive(Debug)]
pub enum Error {
    /// I/O error occurred
    Io(io::Error),
    /// Standard output is not attached to a terminal
    NotATerminal,
    /// The terminal reported a size with a zero dimension
    InvalidSize { rows: u16, columns: u16 },
    /// Operation not supported on this platform
    NotSupported,
    /// The interrupt handler could not be installed
    Signal(ctrlc::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::NotATerminal => write!(f, "Not a terminal"),
            Error::InvalidSize { rows, columns } => {
                write!(f, "Invalid terminal size: {}x{}", columns, rows)
            }
            Error::NotSupported => write!(f, "Operation not supported"),
            Error::Signal(e) => write!(f, "Failed to install interrupt handler: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Signal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Error::Io(io::Error::new(io::ErrorKind::Other, "fmt error"))
    }
}

impl From<ctrlc::Error> for Error {
    fn from(err: ctrlc::Error) -> Self {
        Error::Signal(err)
    }
}

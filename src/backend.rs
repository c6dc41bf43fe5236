use crate::dimensions::Dimensions;
use crate::error::{Error, Result};

#[cfg(unix)]
use std::io;
#[cfg(unix)]
use std::os::unix::io::AsRawFd;

/// Anything that can report the size of the terminal being drawn to.
pub trait SizeSource {
    fn query(&self) -> Result<Dimensions>;
}

/// The process's real controlling terminal, reached through stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Backend;

impl Backend {
    pub(crate) fn get_terminal_size() -> Result<Dimensions> {
        #[cfg(unix)]
        {
            let fd = io::stdout().as_raw_fd();

            // Redirected output has no window size to ask for
            if unsafe { libc::isatty(fd) } == 0 {
                return Err(Error::NotATerminal);
            }

            let mut winsize: libc::winsize = unsafe { std::mem::zeroed() };

            unsafe {
                if libc::ioctl(fd, libc::TIOCGWINSZ, &mut winsize) != 0 {
                    return Err(Error::Io(io::Error::last_os_error()));
                }
            }

            Dimensions::new(winsize.ws_col, winsize.ws_row)
        }

        #[cfg(not(unix))]
        {
            Err(Error::NotSupported)
        }
    }
}

impl SizeSource for Backend {
    fn query(&self) -> Result<Dimensions> {
        Self::get_terminal_size()
    }
}

/// A fixed size always answers with itself.
impl SizeSource for Dimensions {
    fn query(&self) -> Result<Dimensions> {
        Ok(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_terminal_size() {
        // This will work in a real terminal
        match Backend.query() {
            Ok(dims) => {
                assert!(dims.rows > 0);
                assert!(dims.columns > 0);
            }
            Err(err) => assert!(matches!(
                err,
                Error::NotATerminal | Error::Io(_) | Error::InvalidSize { .. }
            )),
        }
    }

    #[test]
    fn test_fixed_size_source() {
        let dims = Dimensions::new(120, 40).unwrap();
        assert_eq!(dims.query().unwrap(), dims);
    }
}

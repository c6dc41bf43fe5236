use crate::backend::SizeSource;
use crate::error::{Error, Result};
use log::debug;

/// Terminal size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: u16,
    pub rows: u16,
}

impl Dimensions {
    /// Classic 80x24 terminal, used whenever the real size is unknown
    pub const DEFAULT: Dimensions = Dimensions {
        columns: 80,
        rows: 24,
    };

    /// Create dimensions, rejecting a zero width or height
    pub fn new(columns: u16, rows: u16) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidSize { rows, columns });
        }
        Ok(Self { columns, rows })
    }

    /// Ask `source` for the current size, falling back to [`Dimensions::DEFAULT`].
    ///
    /// Every failure the query can report is absorbed here; callers never
    /// see an error from the size lookup.
    pub fn query_or_default<S: SizeSource + ?Sized>(source: &S) -> Self {
        match source.query() {
            Ok(dims) => dims,
            Err(
                err @ (Error::NotATerminal
                | Error::NotSupported
                | Error::InvalidSize { .. }
                | Error::Io(_)
                | Error::Signal(_)),
            ) => {
                debug!(
                    "terminal size unavailable ({}), using {}x{}",
                    err,
                    Self::DEFAULT.columns,
                    Self::DEFAULT.rows
                );
                Self::DEFAULT
            }
        }
    }

    /// Blank lines needed above a single line to center it vertically
    pub fn top_padding(&self) -> u16 {
        self.rows.saturating_sub(1) / 2
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unavailable;

    impl SizeSource for Unavailable {
        fn query(&self) -> Result<Dimensions> {
            Err(Error::NotATerminal)
        }
    }

    #[test]
    fn test_top_padding_default() {
        assert_eq!(Dimensions::DEFAULT.top_padding(), 11);
    }

    #[test]
    fn test_top_padding_single_row() {
        let dims = Dimensions::new(80, 1).unwrap();
        assert_eq!(dims.top_padding(), 0);
    }

    #[test]
    fn test_top_padding_matches_formula() {
        for rows in 1..=u16::MAX {
            let dims = Dimensions::new(80, rows).unwrap();
            assert_eq!(dims.top_padding(), (rows - 1) / 2);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Dimensions::new(0, 24),
            Err(Error::InvalidSize { rows: 24, columns: 0 })
        ));
        assert!(Dimensions::new(80, 0).is_err());
    }

    #[test]
    fn test_query_falls_back_to_default() {
        assert_eq!(Dimensions::query_or_default(&Unavailable), Dimensions::DEFAULT);
    }

    #[test]
    fn test_query_uses_reported_size() {
        let dims = Dimensions::new(10, 5).unwrap();
        assert_eq!(Dimensions::query_or_default(&dims), dims);
    }
}

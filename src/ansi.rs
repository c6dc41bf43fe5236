//! Control sequences written to the terminal.

/// Erase the entire display (ED 2)
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Move the cursor to row 1, column 1 (CUP with no parameters)
pub const CURSOR_HOME: &str = "\x1b[H";

/// Hide the cursor (DECTCEM reset)
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the cursor (DECTCEM set)
pub const SHOW_CURSOR: &str = "\x1b[?25h";

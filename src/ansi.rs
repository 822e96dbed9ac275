//! Raw ANSI escape sequences used by the renderers.
//!
//! Control sequences and the shared text styles live here; the eight
//! palette colors live in `Color::escape`. Syntax is `ESC[<params><final>`:
//! `m` for graphic rendition, `K` for clearing the line, `?25l`/`?25h` for
//! cursor visibility.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Reset all graphic attributes (SGR 0).
pub const RESET: &str = "\x1b[0m";

/// Clear from the cursor to the end of the line (EL 0).
pub const CLEAR_LINE: &str = "\x1b[K";

/// Hide the cursor (DECTCEM reset).
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show the cursor (DECTCEM set).
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move to the start of the current line.
pub const CARRIAGE_RETURN: &str = "\r";

/// Bold text (SGR 1).
pub const BOLD: &str = "\x1b[1m";

/// Faint text (SGR 2), used for labels in CLI reports.
pub const FAINT: &str = "\x1b[2m";

/// Cyan foreground, used for section and key names in CLI reports.
pub const CYAN: &str = "\x1b[36m";

/// Loader frame color.
pub const FRAME: &str = CYAN;

/// Bright black foreground, used for the elapsed-time suffix.
pub const DIM: &str = "\x1b[90m";

/// Matches CSI sequences: `ESC[`, optional parameters, one final letter.
static CSI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("CSI pattern is a valid regex")
});

/// Remove every CSI escape sequence from `text`.
///
/// Returns the input unchanged (borrowed) when it contains no sequences.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    CSI_PATTERN.replace_all(text, "")
}

/// Number of characters a terminal would display for `text`.
///
/// Control characters such as `\r` are not counted.
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().filter(|c| !c.is_control()).count()
}

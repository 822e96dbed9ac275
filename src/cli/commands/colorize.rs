//! Colorize and palette command implementations.

use std::io::{self, Write};

use crate::color::{colorize, Color};

/// Print `message` in `color`, followed by a newline.
pub fn print_colorized(out: &mut impl Write, message: &str, color: Color) -> io::Result<()> {
    writeln!(out, "{}", colorize(message, color))
}

/// Print `message` once per color, each line prefixed by the color name.
pub fn print_palette(out: &mut impl Write, message: &str) -> io::Result<()> {
    for color in Color::ALL {
        writeln!(out, "{:<7} {}", color.name(), colorize(message, color))?;
    }
    Ok(())
}

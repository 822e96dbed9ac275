//! Single-line progress bar.
//!
//! Each render overwrites the current terminal line in one write and never
//! emits a newline, so calling it repeatedly animates the bar in place.

use std::io::{self, Write};

use crate::ansi::{CARRIAGE_RETURN, CLEAR_LINE, RESET};
use crate::color::Color;

/// Bar width used when the caller has no preference.
pub const DEFAULT_WIDTH: usize = 20;

/// Characters and color used to draw a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStyle {
    /// Character repeated for the completed part.
    pub fill_char: char,
    /// Character repeated for the remaining part.
    pub empty_char: char,
    /// Color of the completed part.
    pub fill_color: Color,
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self {
            fill_char: '=',
            empty_char: '=',
            fill_color: Color::Green,
        }
    }
}

/// Sanitized state of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    fraction: f64,
    width: usize,
}

impl ProgressState {
    /// Build a state, clamping `fraction` into `[0, 1]`.
    ///
    /// NaN is treated as zero.
    pub fn new(fraction: f64, width: usize) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self { fraction, width }
    }

    /// The clamped fraction.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Total bar width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of fill characters: `floor(fraction * width)`.
    pub fn filled(&self) -> usize {
        // fraction is in [0, 1], so the product never exceeds width.
        ((self.fraction * self.width as f64).floor() as usize).min(self.width)
    }

    /// Number of empty characters.
    pub fn empty(&self) -> usize {
        self.width - self.filled()
    }

    /// Rounded percentage shown after the bar.
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }

    /// The full line: `\r`, clear, colored fill, reset, empty run, label.
    pub fn line(&self, style: &ProgressStyle) -> String {
        let filled = self.filled();
        let empty = self.empty();
        let mut line = String::with_capacity(self.width * 3 + 24);
        line.push_str(CARRIAGE_RETURN);
        line.push_str(CLEAR_LINE);
        line.push_str(style.fill_color.escape());
        line.extend(std::iter::repeat(style.fill_char).take(filled));
        line.push_str(RESET);
        line.extend(std::iter::repeat(style.empty_char).take(empty));
        line.push_str(&self.percent().to_string());
        line.push('%');
        line
    }
}

/// Render a bar with the default style to `out` as one write.
pub fn render_progress(out: &mut impl Write, fraction: f64, width: usize) -> io::Result<()> {
    render_progress_styled(out, fraction, width, &ProgressStyle::default())
}

/// Render a bar with an explicit style to `out` as one write.
pub fn render_progress_styled(
    out: &mut impl Write,
    fraction: f64,
    width: usize,
    style: &ProgressStyle,
) -> io::Result<()> {
    let line = ProgressState::new(fraction, width).line(style);
    out.write_all(line.as_bytes())?;
    out.flush()
}

/// End a sequence of renders so the last bar stays on screen.
pub fn finish_progress(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\n")?;
    out.flush()
}

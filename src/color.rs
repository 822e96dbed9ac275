//! Named foreground colors and the `colorize` formatter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ansi::RESET;
use crate::error::Error;

/// The closed set of colors understood by [`colorize`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `ESC[37m`
    #[default]
    White,
    /// `ESC[34m`
    Blue,
    /// `ESC[31m`
    Red,
    /// `ESC[32m`
    Green,
    /// 256-color palette index 232.
    Gray,
    /// 256-color palette index 208.
    Orange,
    /// `ESC[33m`
    Yellow,
    /// 256-color palette index 129.
    Purple,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 8] = [
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Gray,
        Color::Orange,
        Color::Yellow,
        Color::Purple,
    ];

    /// The escape sequence that switches the foreground to this color.
    pub const fn escape(self) -> &'static str {
        match self {
            Color::White => "\x1b[37m",
            Color::Blue => "\x1b[34m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Gray => "\x1b[38;5;232m",
            Color::Orange => "\x1b[38;5;208m",
            Color::Yellow => "\x1b[33m",
            Color::Purple => "\x1b[38;5;129m",
        }
    }

    /// Lowercase name, as accepted by [`Color::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Gray => "gray",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::invalid_argument("color", s, &Self::names()))
    }
}

/// Wrap `message` in the escape sequence for `color`, followed by a reset.
///
/// Pure: nothing is written anywhere. Use `Color::default()` for white.
pub fn colorize(message: &str, color: Color) -> String {
    let prefix = color.escape();
    let mut out = String::with_capacity(prefix.len() + message.len() + RESET.len());
    out.push_str(prefix);
    out.push_str(message);
    out.push_str(RESET);
    out
}

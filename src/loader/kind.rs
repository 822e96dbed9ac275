//! Loader animation kinds and their frame sequences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// `dots` frames: a growing ellipsis, padded to a fixed width.
pub static DOTS_FRAMES: &[&str] = &["   ", ".  ", ".. ", "..."];

/// `spin` frames: braille spinner.
pub static SPIN_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// `bar` frames: a bracketed bar filling up.
pub static BAR_FRAMES: &[&str] = &["[    ]", "[=   ]", "[==  ]", "[=== ]", "[====]"];

/// The closed set of loader animations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    /// Growing ellipsis.
    #[default]
    Dots,
    /// Braille spinner.
    Spin,
    /// Bracketed bar.
    Bar,
}

impl LoaderKind {
    /// Every kind, in declaration order.
    pub const ALL: [LoaderKind; 3] = [LoaderKind::Dots, LoaderKind::Spin, LoaderKind::Bar];

    /// The ordered, never-empty frame sequence for this kind.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            LoaderKind::Dots => DOTS_FRAMES,
            LoaderKind::Spin => SPIN_FRAMES,
            LoaderKind::Bar => BAR_FRAMES,
        }
    }

    /// Frame at `index`, wrapping around the sequence.
    pub fn frame(self, index: usize) -> &'static str {
        let frames = self.frames();
        frames[index % frames.len()]
    }

    /// Lowercase name, as accepted by [`LoaderKind::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            LoaderKind::Dots => "dots",
            LoaderKind::Spin => "spin",
            LoaderKind::Bar => "bar",
        }
    }
}

impl fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoaderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.name() == s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
            Error::invalid_argument("loader kind", s, &names)
        })
    }
}

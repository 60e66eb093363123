use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::AccentError;

/// A validated seed color. Immutable once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedColor(Color);

impl SeedColor {
    /// Accept exactly six hex digits after an optional leading `#`.
    pub fn parse(input: &str) -> Result<Self, AccentError> {
        Color::from_hex(input).map(Self)
    }

    pub fn color(self) -> Color {
        self.0
    }

    /// Canonical `#rrggbb` form.
    pub fn canonical(self) -> String {
        self.0.to_hex()
    }
}

impl FromStr for SeedColor {
    type Err = AccentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

use std::fmt;

use serde::{Serialize, Serializer};

use crate::color::Color;

/// The value of a single accent token as consumed by stylesheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Opaque color, written as `#rrggbb`.
    Solid(Color),
    /// Translucent color, written as `rgba(r, g, b, a)`.
    Translucent { color: Color, alpha: f32 },
}

impl Token {
    /// The color this token renders as when painted over `backdrop`.
    pub fn composite_over(self, backdrop: Color) -> Color {
        match self {
            Token::Solid(color) => color,
            Token::Translucent { color, alpha } => color.blend_over(backdrop, alpha),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Token::Solid(color) | Token::Translucent { color, .. } => color,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Solid(color) => write!(f, "{color}"),
            Token::Translucent { color, alpha } => write!(
                f,
                "rgba({}, {}, {}, {:.2})",
                color.r, color.g, color.b, alpha
            ),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The finalized family of accent tokens.
///
/// Field order is the key order of `accent-tokens.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccentTokenSet {
    pub accent: Token,
    #[serde(rename = "accent-hover")]
    pub accent_hover: Token,
    #[serde(rename = "accent-surface")]
    pub accent_surface: Token,
    #[serde(rename = "accent-surface-dark")]
    pub accent_surface_dark: Token,
    #[serde(rename = "accent-foreground")]
    pub accent_foreground: Token,
    #[serde(rename = "accent-dark")]
    pub accent_dark: Token,
    /// Dark-mode hover is the light-mode seed.
    #[serde(rename = "accent-hover-dark")]
    pub accent_hover_dark: Token,
}

impl AccentTokenSet {
    /// `(key, token)` pairs in serialization order.
    pub fn entries(&self) -> [(&'static str, Token); 7] {
        [
            ("accent", self.accent),
            ("accent-hover", self.accent_hover),
            ("accent-surface", self.accent_surface),
            ("accent-surface-dark", self.accent_surface_dark),
            ("accent-foreground", self.accent_foreground),
            ("accent-dark", self.accent_dark),
            ("accent-hover-dark", self.accent_hover_dark),
        ]
    }
}

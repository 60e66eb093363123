//! Accent color derivation and contrast validation.
//!
//! A single seed color is expanded into hover, dark-mode, foreground and
//! surface tokens using Oklch lightness steps, checked against WCAG contrast
//! minimums, and rendered as JSON, CSS and Tailwind artifacts.

pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod tokens;

pub use config::{DeriveConfig, DeriveOptions};
pub use error::AccentError;
pub use pipeline::{derive_accent, AccentReport};

use tracing::{debug, warn};

use crate::color::Color;
use crate::config::DeriveConfig;
use crate::pipeline::normalize::SeedColor;
use crate::tokens::Token;

pub const NEAR_GRAY_WARNING: &str =
    "accent is near-gray and may be indistinct from locked neutrals";

/// Every variant derived from a seed, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Variants {
    pub seed: Color,
    /// Oklch lightness of the seed.
    pub seed_lightness: f32,
    pub seed_chroma: f32,
    /// Darker state for light mode; the only variant repair may touch.
    pub hover: Color,
    /// Base accent in dark mode.
    pub dark: Color,
    pub foreground: Token,
    pub surface: Token,
    pub surface_dark: Token,
    /// `surface` composited over the light canvas.
    pub surface_on_canvas: Color,
    /// `surface_dark` composited over the dark canvas.
    pub surface_dark_on_canvas: Color,
    pub warnings: Vec<String>,
}

/// Derive hover, dark-mode, foreground and surface variants from a seed.
///
/// Lightness moves happen in Oklch so one step reads the same for every hue.
/// Surfaces are plain alpha blends since that is how the browser paints them.
pub fn derive_variants(seed: &SeedColor, config: &DeriveConfig) -> Variants {
    let color = seed.color();
    let oklch = color.to_oklch();

    let hover = color.adjust_lightness(-config.lightness_step);
    let dark = color.adjust_lightness(config.lightness_step);

    // Hard switch: a gradual fade would bottom out at mid-gray on mid-gray.
    let foreground = if oklch.l > config.foreground_threshold {
        config.text_dark
    } else {
        config.text_light
    };

    let surface = Token::Translucent {
        color,
        alpha: config.surface_alpha,
    };
    let surface_dark = Token::Translucent {
        color,
        alpha: config.surface_dark_alpha,
    };

    let mut warnings = Vec::new();
    if oklch.chroma < config.near_gray_chroma {
        warn!(seed = %color, chroma = oklch.chroma, "{}", NEAR_GRAY_WARNING);
        warnings.push(NEAR_GRAY_WARNING.to_string());
    }

    debug!(
        seed = %color,
        lightness = oklch.l,
        hover = %hover,
        dark = %dark,
        foreground = %foreground,
        "derived variants"
    );

    Variants {
        seed: color,
        seed_lightness: oklch.l,
        seed_chroma: oklch.chroma,
        hover,
        dark,
        foreground,
        surface,
        surface_dark,
        surface_on_canvas: surface.composite_over(config.canvas_light),
        surface_dark_on_canvas: surface_dark.composite_over(config.canvas_dark),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TEXT_DARK, TEXT_LIGHT_87};

    fn derive(hex: &str) -> Variants {
        derive_variants(&SeedColor::parse(hex).unwrap(), &DeriveConfig::default())
    }

    #[test]
    fn hover_and_dark_move_lightness_by_step() {
        let v = derive("#b9975c");
        let hover_l = v.hover.lightness();
        let dark_l = v.dark.lightness();
        // Rounding to 8-bit channels moves lightness by well under 0.01.
        assert!((v.seed_lightness - 0.15 - hover_l).abs() < 0.01, "hover {hover_l}");
        assert!((v.seed_lightness + 0.15 - dark_l).abs() < 0.01, "dark {dark_l}");
    }

    #[test]
    fn light_seed_gets_dark_text() {
        let v = derive("#b9975c");
        assert!(v.seed_lightness > 0.55);
        assert_eq!(v.foreground, TEXT_DARK);
    }

    #[test]
    fn dark_seed_gets_translucent_light_text() {
        let v = derive("#8a5a20");
        assert!(v.seed_lightness <= 0.55);
        assert_eq!(v.foreground, TEXT_LIGHT_87);
        assert_eq!(v.foreground.to_string(), "rgba(255, 251, 247, 0.87)");
    }

    #[test]
    fn surfaces_are_translucent_seed() {
        let v = derive("#b9975c");
        assert_eq!(v.surface.to_string(), "rgba(185, 151, 92, 0.10)");
        assert_eq!(v.surface_dark.to_string(), "rgba(185, 151, 92, 0.15)");
        assert_eq!(v.surface_on_canvas, Color::new(248, 238, 227));
        assert_eq!(v.surface_dark_on_canvas, Color::new(54, 49, 40));
    }

    #[test]
    fn near_gray_seed_is_flagged_but_not_rejected() {
        let v = derive("#7a7a7a");
        assert_eq!(v.warnings, vec![NEAR_GRAY_WARNING.to_string()]);
    }

    #[test]
    fn saturated_seed_has_no_warnings() {
        assert!(derive("#2563eb").warnings.is_empty());
    }

    #[test]
    fn lightness_saturates_at_white() {
        let v = derive("#ffffff");
        assert_eq!(v.dark, Color::new(255, 255, 255));
    }
}

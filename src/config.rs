use crate::color::Color;
use crate::tokens::Token;

/// Light-mode page background.
pub const CANVAS_LIGHT: Color = Color::new(0xff, 0xf8, 0xf2);
/// Dark-mode base elevation.
pub const CANVAS_DARK: Color = Color::new(0x1f, 0x1f, 0x1f);
/// Text placed on light accents.
pub const TEXT_DARK: Token = Token::Solid(Color::new(0x1f, 0x1f, 0x1f));
/// Text placed on dark accents, slightly translucent.
pub const TEXT_LIGHT_87: Token = Token::Translucent {
    color: Color::new(0xff, 0xfb, 0xf7),
    alpha: 0.87,
};

/// Minimum contrast for large UI elements and icons.
pub const MIN_UI_CONTRAST: f32 = 3.0;
/// Minimum contrast for body text.
pub const MIN_TEXT_CONTRAST: f32 = 4.5;

/// Every tunable constant of the derivation, with the design language's
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DeriveConfig {
    pub canvas_light: Color,
    pub canvas_dark: Color,
    pub text_dark: Token,
    pub text_light: Token,
    /// Oklch lightness delta for the hover and dark-mode variants.
    pub lightness_step: f32,
    /// Oklch lightness removed per hover repair iteration.
    pub repair_step: f32,
    /// Seeds lighter than this get dark foreground text.
    pub foreground_threshold: f32,
    pub surface_alpha: f32,
    pub surface_dark_alpha: f32,
    /// Seeds with less Oklch chroma than this trigger the near-gray advisory.
    pub near_gray_chroma: f32,
    pub min_ui_contrast: f32,
    pub min_text_contrast: f32,
    pub max_repair_steps: usize,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            canvas_light: CANVAS_LIGHT,
            canvas_dark: CANVAS_DARK,
            text_dark: TEXT_DARK,
            text_light: TEXT_LIGHT_87,
            lightness_step: 0.15,
            repair_step: 0.05,
            foreground_threshold: 0.55,
            surface_alpha: 0.10,
            surface_dark_alpha: 0.15,
            near_gray_chroma: 0.02,
            min_ui_contrast: MIN_UI_CONTRAST,
            min_text_contrast: MIN_TEXT_CONTRAST,
            // 20 * 0.05 spans the whole lightness axis.
            max_repair_steps: 20,
        }
    }
}

/// Per-invocation options for [`crate::derive_accent`].
#[derive(Debug, Clone, Default)]
pub struct DeriveOptions {
    /// Free-form label stored in the token record; never used in computation.
    pub name: Option<String>,
    /// Emit even when a reported contrast check fails.
    pub force: bool,
    pub config: DeriveConfig,
}

impl DeriveOptions {
    pub fn new(name: Option<String>, force: bool) -> Self {
        Self {
            name,
            force,
            config: DeriveConfig::default(),
        }
    }
}

pub mod contrast;
pub mod derive;
pub mod gate;
pub mod normalize;

use serde::Serialize;
use tracing::info;

use crate::config::DeriveOptions;
use crate::error::AccentError;
use crate::tokens::{AccentTokenSet, Token};

use contrast::ContrastCheck;
use derive::{derive_variants, Variants};
use gate::HoverRepair;
use normalize::SeedColor;

/// Everything a finalized run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AccentReport {
    pub seed: SeedColor,
    pub name: Option<String>,
    pub tokens: AccentTokenSet,
    pub variants: Variants,
    /// The three reported checks, in fixed order.
    pub checks: [ContrastCheck; 3],
    pub repair: HoverRepair,
    /// True when `force` let failing checks through.
    pub forced: bool,
    pub warnings: Vec<String>,
}

/// The structured token record written to `accent-tokens.json`.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub accent: &'a AccentTokenSet,
    pub name: Option<&'a str>,
}

impl AccentReport {
    pub fn record(&self) -> TokenRecord<'_> {
        TokenRecord {
            accent: &self.tokens,
            name: self.name.as_deref(),
        }
    }

    /// Human-readable PASS/FAIL lines for the reported checks.
    pub fn summary(&self) -> String {
        let mut out = String::from("Contrast results:\n");
        for check in &self.checks {
            out.push_str(&format!("  {check}\n"));
        }
        out
    }
}

/// Normalize, derive, validate, repair and gate a seed color.
///
/// Returns [`AccentError::AccessibilityGateBlocked`] when a reported check
/// fails and `options.force` is not set.
pub fn derive_accent(seed_hex: &str, options: &DeriveOptions) -> Result<AccentReport, AccentError> {
    let seed = SeedColor::parse(seed_hex)?;
    let config = &options.config;

    let variants = derive_variants(&seed, config);
    let outcome = gate::run(variants, config, options.force)?;
    let variants = outcome.variants;

    let tokens = AccentTokenSet {
        accent: Token::Solid(seed.color()),
        accent_hover: Token::Solid(variants.hover),
        accent_surface: variants.surface,
        accent_surface_dark: variants.surface_dark,
        accent_foreground: variants.foreground,
        accent_dark: Token::Solid(variants.dark),
        accent_hover_dark: Token::Solid(seed.color()),
    };

    info!(
        seed = %seed,
        hover = %variants.hover,
        repair_steps = outcome.repair.steps(),
        forced = outcome.forced,
        "accent finalized"
    );

    Ok(AccentReport {
        seed,
        name: options.name.clone(),
        tokens,
        warnings: variants.warnings.clone(),
        variants,
        checks: outcome.checks,
        repair: outcome.repair,
        forced: outcome.forced,
    })
}

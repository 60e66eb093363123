use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::pipeline::AccentReport;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white label text for readable swatches.
fn label_color(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Render one swatch line per token. Translucent tokens are shown as they
/// composite: surfaces over their canvas, the foreground over the seed.
pub fn render(report: &AccentReport) -> String {
    let mut out = String::new();
    for (key, token) in report.tokens.entries() {
        let shown = match key {
            "accent-surface" => report.variants.surface_on_canvas,
            "accent-surface-dark" => report.variants.surface_dark_on_canvas,
            "accent-foreground" => token.composite_over(report.variants.seed),
            _ => token.color(),
        };
        let swatch = format!("{:^9}", shown.to_hex())
            .with(label_color(shown))
            .on(to_term(shown));
        out.push_str(&format!("  {swatch} {key:<20} {token}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeriveOptions;
    use crate::pipeline::derive_accent;

    #[test]
    fn one_line_per_token() {
        let report = derive_accent("#8a5a20", &DeriveOptions::default()).unwrap();
        let preview = render(&report);
        assert_eq!(preview.lines().count(), 7);
        assert!(preview.contains("accent-hover-dark"));
        assert!(preview.contains("rgba(138, 90, 32, 0.10)"));
    }

    #[test]
    fn surface_swatch_shows_composited_color() {
        let report = derive_accent("#8a5a20", &DeriveOptions::default()).unwrap();
        let preview = render(&report);
        assert!(preview.contains(&report.variants.surface_on_canvas.to_hex()));
    }
}

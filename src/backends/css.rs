use crate::error::AccentError;
use crate::pipeline::AccentReport;
use crate::tokens::Token;

use super::ArtifactBackend;

/// CSS custom properties for light and dark mode.
///
/// Dark values are declared twice: under the OS media query, unless the page
/// pins `data-theme="light"`, and then under `[data-theme="dark"]`. Both
/// selectors share specificity, so the later attribute block wins.
pub struct CssBackend;

const LIGHT_SELECTOR: &str = ":root";
const MEDIA_QUERY: &str = "@media (prefers-color-scheme: dark)";
const MEDIA_SELECTOR: &str = ":root:not([data-theme=\"light\"])";
const DARK_SELECTOR: &str = ":root[data-theme=\"dark\"]";

fn push_block(out: &mut String, indent: &str, selector: &str, vars: &[(&str, Token)]) {
    out.push_str(&format!("{indent}{selector} {{\n"));
    for (name, token) in vars {
        out.push_str(&format!("{indent}  --color-{name}: {token};\n"));
    }
    out.push_str(&format!("{indent}}}\n"));
}

impl ArtifactBackend for CssBackend {
    fn name(&self) -> &str {
        "CSS custom properties"
    }

    fn file_name(&self) -> &str {
        "accent-vars.css"
    }

    fn serialize(&self, report: &AccentReport) -> Result<String, AccentError> {
        let t = &report.tokens;
        let light = [
            ("accent", t.accent),
            ("accent-hover", t.accent_hover),
            ("accent-surface", t.accent_surface),
            ("accent-foreground", t.accent_foreground),
        ];
        let dark = [
            ("accent", t.accent_dark),
            ("accent-hover", t.accent_hover_dark),
            ("accent-surface", t.accent_surface_dark),
            ("accent-foreground", t.accent_foreground),
        ];

        let mut out = String::new();
        push_block(&mut out, "", LIGHT_SELECTOR, &light);
        out.push('\n');
        out.push_str(MEDIA_QUERY);
        out.push_str(" {\n");
        push_block(&mut out, "  ", MEDIA_SELECTOR, &dark);
        out.push_str("}\n\n");
        push_block(&mut out, "", DARK_SELECTOR, &dark);
        Ok(out)
    }
}

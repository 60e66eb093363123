use crate::error::AccentError;
use crate::pipeline::AccentReport;

use super::ArtifactBackend;

/// Tailwind `theme.extend.colors` fragment with the light-mode keys.
pub struct TailwindBackend;

impl ArtifactBackend for TailwindBackend {
    fn name(&self) -> &str {
        "Tailwind colors"
    }

    fn file_name(&self) -> &str {
        "accent-tailwind.js"
    }

    fn serialize(&self, report: &AccentReport) -> Result<String, AccentError> {
        let t = &report.tokens;
        let mut out = String::new();
        out.push_str("export default {\n");
        out.push_str("  accent: {\n");
        out.push_str(&format!("    DEFAULT: '{}',\n", t.accent));
        out.push_str(&format!("    hover: '{}',\n", t.accent_hover));
        out.push_str(&format!("    surface: '{}',\n", t.accent_surface));
        out.push_str(&format!("    foreground: '{}',\n", t.accent_foreground));
        out.push_str("  },\n");
        out.push_str("};\n");
        Ok(out)
    }
}

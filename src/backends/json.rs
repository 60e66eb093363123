use crate::error::AccentError;
use crate::pipeline::AccentReport;

use super::ArtifactBackend;

/// Design-token record: `{ "accent": { ... }, "name": ... }`.
pub struct JsonBackend;

impl ArtifactBackend for JsonBackend {
    fn name(&self) -> &str {
        "JSON tokens"
    }

    fn file_name(&self) -> &str {
        "accent-tokens.json"
    }

    fn serialize(&self, report: &AccentReport) -> Result<String, AccentError> {
        Ok(serde_json::to_string_pretty(&report.record())?)
    }
}

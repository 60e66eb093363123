use std::path::PathBuf;

use crate::pipeline::contrast::ContrastCheck;

/// Failures surfaced by the accent pipeline.
///
/// Only the near-gray advisory is non-fatal; it is logged rather than
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum AccentError {
    #[error("invalid hex color {input:?}: expected 6 hex digits, optionally prefixed with '#'")]
    InvalidInput { input: String },

    #[error("contrast check failures:\n{}", format_failures(.failures))]
    AccessibilityGateBlocked { failures: Vec<ContrastCheck> },

    /// Takes precedence over a blocked gate; any reported checks that were
    /// also failing ride along in `failures`.
    #[error(
        "hover repair gave up after {steps} steps; best hover contrast was {best_ratio:.2}:1 (needs {minimum}:1){}",
        format_also_failing(.failures)
    )]
    RepairExhausted {
        steps: usize,
        best_ratio: f32,
        minimum: f32,
        failures: Vec<ContrastCheck>,
    },

    #[error("failed to serialize accent tokens")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_failures(failures: &[ContrastCheck]) -> String {
    failures
        .iter()
        .map(|f| {
            format!(
                "  {}: {:.2}:1 (needs {}:1)",
                f.pairing,
                f.rounded_ratio(),
                f.minimum
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_also_failing(failures: &[ContrastCheck]) -> String {
    if failures.is_empty() {
        String::new()
    } else {
        format!("\nalso failing:\n{}", format_failures(failures))
    }
}

pub mod css;
pub mod json;
pub mod tailwind;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AccentError;
use crate::pipeline::AccentReport;

pub use css::CssBackend;
pub use json::JsonBackend;
pub use tailwind::TailwindBackend;

/// One serialized form of a finalized accent.
pub trait ArtifactBackend {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// File name the artifact is written under.
    fn file_name(&self) -> &str;

    /// Render the artifact.
    fn serialize(&self, report: &AccentReport) -> Result<String, AccentError>;
}

/// The three artifacts every finalized run produces.
pub fn all_backends() -> [&'static dyn ArtifactBackend; 3] {
    [&JsonBackend, &CssBackend, &TailwindBackend]
}

/// Render every artifact as `(file name, contents)`.
pub fn render_all(report: &AccentReport) -> Result<Vec<(String, String)>, AccentError> {
    all_backends()
        .iter()
        .map(|backend| Ok((backend.file_name().to_string(), backend.serialize(report)?)))
        .collect()
}

/// Write all three artifacts into `dir`, or none of them.
///
/// Contents are rendered before anything touches the disk; if a write
/// fails, files already written by this call are removed again.
pub fn write_artifacts(report: &AccentReport, dir: &Path) -> Result<Vec<PathBuf>, AccentError> {
    let rendered = render_all(report)?;
    let mut written: Vec<PathBuf> = Vec::with_capacity(rendered.len());

    for (file_name, contents) in rendered {
        let path = dir.join(file_name);
        if let Err(source) = std::fs::write(&path, contents) {
            for done in &written {
                if let Err(err) = std::fs::remove_file(done) {
                    warn!(path = %done.display(), %err, "failed to roll back artifact");
                }
            }
            return Err(AccentError::Io { path, source });
        }
        info!(path = %path.display(), "wrote artifact");
        written.push(path);
    }

    Ok(written)
}

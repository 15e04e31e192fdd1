//! Solution bundle persistence: write a run's artifacts to a directory.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   bundle_manifest.json — problem id, strategy, declared artifact list
//!   solution.txt         — rendered solution path (presentation, free-form)
//!   search_report.json   — run summary, deterministic JSON (sorted keys)
//! ```
//!
//! The directory path is never part of any artifact content. Writes are
//! fail-closed: any I/O or serialization failure surfaces as an error.

use std::fs;
use std::path::Path;

use wavefront_search::report::SearchStrategyV1;

/// Filename of the bundle manifest.
pub const MANIFEST_FILENAME: &str = "bundle_manifest.json";
/// Filename of the rendered solution artifact.
pub const SOLUTION_FILENAME: &str = "solution.txt";
/// Filename of the serialized report artifact.
pub const REPORT_FILENAME: &str = "search_report.json";

/// A run's artifacts, packaged for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionBundleV1 {
    /// Caller-chosen identifier for the problem instance.
    pub problem_id: String,
    /// The strategy that produced the solution.
    pub strategy: SearchStrategyV1,
    /// Rendered solution path.
    pub solution_text: String,
    /// Serialized `SearchReportV1` bytes.
    pub report_json: Vec<u8>,
}

impl SolutionBundleV1 {
    /// The manifest value declaring this bundle's identity and artifacts.
    #[must_use]
    pub fn manifest_value(&self) -> serde_json::Value {
        serde_json::json!({
            "artifacts": [REPORT_FILENAME, SOLUTION_FILENAME],
            "problem_id": self.problem_id,
            "strategy": self.strategy.as_str(),
        })
    }
}

/// Error writing a bundle directory.
#[derive(Debug)]
pub enum BundleWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// Manifest serialization failed.
    EncodeError { detail: String },
}

impl std::fmt::Display for BundleWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::EncodeError { detail } => write!(f, "manifest encoding error: {detail}"),
        }
    }
}

impl std::error::Error for BundleWriteError {}

/// Write the bundle's artifacts into `dir`, creating the directory if
/// needed.
///
/// # Errors
///
/// Returns [`BundleWriteError::Io`] if the directory or a file cannot be
/// written, and [`BundleWriteError::EncodeError`] if the manifest cannot be
/// serialized.
pub fn write_bundle(bundle: &SolutionBundleV1, dir: &Path) -> Result<(), BundleWriteError> {
    let manifest =
        serde_json::to_vec(&bundle.manifest_value()).map_err(|err| BundleWriteError::EncodeError {
            detail: err.to_string(),
        })?;

    fs::create_dir_all(dir).map_err(io_detail)?;
    fs::write(dir.join(MANIFEST_FILENAME), manifest).map_err(io_detail)?;
    fs::write(dir.join(SOLUTION_FILENAME), &bundle.solution_text).map_err(io_detail)?;
    fs::write(dir.join(REPORT_FILENAME), &bundle.report_json).map_err(io_detail)?;
    Ok(())
}

fn io_detail(err: std::io::Error) -> BundleWriteError {
    BundleWriteError::Io {
        detail: err.to_string(),
    }
}

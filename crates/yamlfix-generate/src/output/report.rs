use std::path::Path;

use crate::errors::{GenerationError, Result};
use crate::model::FixtureReport;

/// Write the run report as pretty JSON, creating parent directories.
pub fn write_report_json(path: &Path, report: &FixtureReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| GenerationError::io(parent, err))?;
        }
    }

    let data = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, data).map_err(|err| GenerationError::io(path, err))
}

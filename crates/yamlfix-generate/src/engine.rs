use std::time::Instant;

use tracing::{debug, info};

use crate::errors::{GenerationError, Result};
use crate::generators::render;
use crate::model::{FixtureFileReport, FixtureKind, FixtureParams, FixtureReport};
use crate::output::write_file;

/// Generates fixture files into an output directory.
#[derive(Debug, Clone)]
pub struct FixtureEngine {
    params: FixtureParams,
}

impl FixtureEngine {
    pub fn new(params: FixtureParams) -> Self {
        Self { params }
    }

    /// Generate every fixture.
    pub fn run(&self) -> Result<FixtureReport> {
        self.run_only(&FixtureKind::ALL)
    }

    /// Generate the requested fixtures in canonical order, skipping duplicates.
    pub fn run_only(&self, kinds: &[FixtureKind]) -> Result<FixtureReport> {
        let start = Instant::now();
        let output_dir = &self.params.output_dir;
        std::fs::create_dir_all(output_dir)
            .map_err(|err| GenerationError::io(output_dir, err))?;

        info!(
            output_dir = %output_dir.display(),
            fixtures = kinds.len(),
            "fixture generation started"
        );

        let mut report = FixtureReport::new(self.params.clone());
        for kind in FixtureKind::ALL {
            if !kinds.contains(&kind) {
                debug!(fixture = %kind, "fixture skipped");
                continue;
            }

            let path = output_dir.join(kind.file_name());
            let content = render(kind, &self.params);
            let lines = content.lines().count();
            let bytes_written = write_file(&path, &content)?;

            info!(
                fixture = %kind,
                path = %path.display(),
                lines,
                bytes_written,
                "fixture written"
            );

            report.files.push(FixtureFileReport {
                kind,
                path,
                description: kind.describe(&self.params),
                lines,
                bytes_written,
            });
        }

        info!(
            files = report.files.len(),
            bytes_written = report.bytes_total(),
            duration_ms = start.elapsed().as_millis() as u64,
            "fixture generation completed"
        );

        Ok(report)
    }
}

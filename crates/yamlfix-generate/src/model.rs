use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parameters for a fixture run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureParams {
    /// Entries in `small.yaml`.
    pub small_size: usize,
    /// Entries in `large.yaml`.
    pub large_size: usize,
    /// Levels in `nested.yaml`.
    pub nested_depth: usize,
    /// Keys per level in `nested.yaml`.
    pub nested_width: usize,
    /// Records in `arrays.yaml`.
    pub array_size: usize,
    /// Properties per record in `arrays.yaml`.
    pub array_props: usize,
    /// Directory where fixtures are written.
    pub output_dir: PathBuf,
}

impl Default for FixtureParams {
    fn default() -> Self {
        Self {
            small_size: 100,
            large_size: 1000,
            nested_depth: 4,
            nested_width: 10,
            array_size: 500,
            array_props: 5,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Fixture files produced by the generator, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    Small,
    Large,
    Nested,
    Arrays,
    Complex,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 5] = [
        FixtureKind::Small,
        FixtureKind::Large,
        FixtureKind::Nested,
        FixtureKind::Arrays,
        FixtureKind::Complex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FixtureKind::Small => "small",
            FixtureKind::Large => "large",
            FixtureKind::Nested => "nested",
            FixtureKind::Arrays => "arrays",
            FixtureKind::Complex => "complex",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            FixtureKind::Small => "small.yaml",
            FixtureKind::Large => "large.yaml",
            FixtureKind::Nested => "nested.yaml",
            FixtureKind::Arrays => "arrays.yaml",
            FixtureKind::Complex => "complex.yaml",
        }
    }

    /// Human-readable description of the parameters that shaped this fixture.
    pub fn describe(self, params: &FixtureParams) -> String {
        match self {
            FixtureKind::Small => format!("{} entries", params.small_size),
            FixtureKind::Large => format!("{} entries", params.large_size),
            FixtureKind::Nested => format!(
                "depth={}, width={}",
                params.nested_depth, params.nested_width
            ),
            FixtureKind::Arrays => format!(
                "count={}, props={}",
                params.array_size, params.array_props
            ),
            FixtureKind::Complex => "static complex features".to_string(),
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FixtureKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                format!("unknown fixture '{value}' (expected small, large, nested, arrays or complex)")
            })
    }
}

/// Summary of a single written fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureFileReport {
    pub kind: FixtureKind,
    pub path: PathBuf,
    pub description: String,
    pub lines: usize,
    pub bytes_written: u64,
}

/// Report for a fixture run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureReport {
    pub output_dir: PathBuf,
    pub params: FixtureParams,
    pub files: Vec<FixtureFileReport>,
}

impl FixtureReport {
    pub fn new(params: FixtureParams) -> Self {
        Self {
            output_dir: params.output_dir.clone(),
            params,
            files: Vec::new(),
        }
    }

    pub fn bytes_total(&self) -> u64 {
        self.files.iter().map(|file| file.bytes_written).sum()
    }

    /// Multi-line summary listing each generated file and its parameters.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Generated test files in '{}':",
            self.output_dir.display()
        )];
        for file in &self.files {
            lines.push(format!("  {} ({})", file.kind.file_name(), file.description));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_case_insensitively() {
        assert_eq!("Nested".parse::<FixtureKind>(), Ok(FixtureKind::Nested));
        assert!("huge".parse::<FixtureKind>().is_err());
    }

    #[test]
    fn describes_parameters_per_kind() {
        let params = FixtureParams::default();
        assert_eq!(FixtureKind::Small.describe(&params), "100 entries");
        assert_eq!(FixtureKind::Large.describe(&params), "1000 entries");
        assert_eq!(FixtureKind::Nested.describe(&params), "depth=4, width=10");
        assert_eq!(FixtureKind::Arrays.describe(&params), "count=500, props=5");
        assert_eq!(
            FixtureKind::Complex.describe(&params),
            "static complex features"
        );
    }

    #[test]
    fn summary_lists_files_in_order() {
        let params = FixtureParams {
            output_dir: PathBuf::from("fixtures"),
            ..FixtureParams::default()
        };
        let mut report = FixtureReport::new(params.clone());
        for kind in [FixtureKind::Small, FixtureKind::Complex] {
            report.files.push(FixtureFileReport {
                kind,
                path: params.output_dir.join(kind.file_name()),
                description: kind.describe(&params),
                lines: 1,
                bytes_written: 2,
            });
        }

        assert_eq!(
            report.summary(),
            "Generated test files in 'fixtures':\n  small.yaml (100 entries)\n  complex.yaml (static complex features)"
        );
        assert_eq!(report.bytes_total(), 4);
    }
}

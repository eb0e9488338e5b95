use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use thiserror::Error;

use yamlfix_generate::FixtureParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Fixture sizes that may come from flags or a TOML file.
///
/// Unset fields fall through to the next source and finally to
/// [`FixtureParams::default`].
#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Number of entries in small.yaml (default: 100).
    #[arg(long, value_name = "N")]
    pub small_size: Option<usize>,
    /// Number of entries in large.yaml (default: 1000).
    #[arg(long, value_name = "N")]
    pub large_size: Option<usize>,
    /// Depth of nested mapping for nested.yaml (default: 4).
    #[arg(long, value_name = "N")]
    pub nested_depth: Option<usize>,
    /// Number of keys per level for nested.yaml (default: 10).
    #[arg(long, value_name = "N")]
    pub nested_width: Option<usize>,
    /// Number of objects in arrays.yaml (default: 500).
    #[arg(long, value_name = "N")]
    pub array_size: Option<usize>,
    /// Number of properties per object in arrays.yaml (default: 5).
    #[arg(long, value_name = "N")]
    pub array_props: Option<usize>,
    /// Directory to write fixture files to (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl FixtureConfig {
    /// Fill every unset field from `fallback`.
    pub fn merge(self, fallback: FixtureConfig) -> FixtureConfig {
        FixtureConfig {
            small_size: self.small_size.or(fallback.small_size),
            large_size: self.large_size.or(fallback.large_size),
            nested_depth: self.nested_depth.or(fallback.nested_depth),
            nested_width: self.nested_width.or(fallback.nested_width),
            array_size: self.array_size.or(fallback.array_size),
            array_props: self.array_props.or(fallback.array_props),
            output_dir: self.output_dir.or(fallback.output_dir),
        }
    }

    pub fn into_params(self) -> FixtureParams {
        let defaults = FixtureParams::default();
        FixtureParams {
            small_size: self.small_size.unwrap_or(defaults.small_size),
            large_size: self.large_size.unwrap_or(defaults.large_size),
            nested_depth: self.nested_depth.unwrap_or(defaults.nested_depth),
            nested_width: self.nested_width.unwrap_or(defaults.nested_width),
            array_size: self.array_size.unwrap_or(defaults.array_size),
            array_props: self.array_props.unwrap_or(defaults.array_props),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
        }
    }
}

/// Load a TOML config file. A relative `output_dir` resolves against the
/// file's own directory.
pub fn load_config(path: &Path) -> Result<FixtureConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: FixtureConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = config.output_dir.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.output_dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
    }

    Ok(config)
}

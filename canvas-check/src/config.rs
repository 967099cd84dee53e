//! Run configuration.

use crate::error::{CheckError, CheckResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How to select and run conformance cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Only run cases whose name contains this substring.
    pub filter: Option<String>,
    /// Number of worker threads. Must be at least 1.
    pub jobs: usize,
    /// Write the surface of each failing case to `<dump_dir>/<name>.png`.
    pub dump_dir: Option<PathBuf>,
    /// Stop starting new cases after the first failure.
    pub fail_fast: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            jobs: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            dump_dir: None,
            fail_fast: false,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> CheckResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CheckResult<()> {
        if self.jobs == 0 {
            return Err(CheckError::Config("jobs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Whether the case called `name` is selected by the filter.
    pub fn selects(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| name.contains(filter))
    }
}

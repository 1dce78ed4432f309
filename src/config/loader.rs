//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configuration from YAML files.

use chrono::Weekday;
use std::fs;
use std::path::Path;

use crate::calendar::Palette;
use crate::error::{EngineError, EngineResult};
use crate::models::BranchPolicy;

use super::types::{AttendanceConfig, BranchEntry, BranchesConfig};

/// Loads and provides access to attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/attendance/
/// ├── branches.yaml   # Weekly holiday per branch (required)
/// └── palette.yaml    # Calendar colours (optional, built-in defaults otherwise)
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance")?;
/// let policy = loader.branch_policy("Main Branch");
/// println!("Weekly holiday: {:?}", policy.weekly_holiday);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `branches.yaml` is missing
    /// - Any file contains invalid YAML
    /// - A branch names a weekday that does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let branches_path = path.join("branches.yaml");
        let branches_config = Self::load_yaml::<BranchesConfig>(&branches_path)?;
        let branches = Self::parse_branches(&branches_path, branches_config.branches)?;

        let palette_path = path.join("palette.yaml");
        let palette = if palette_path.exists() {
            Self::load_yaml::<Palette>(&palette_path)?
        } else {
            Palette::default()
        };

        Ok(Self::from_config(AttendanceConfig::new(branches, palette)))
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: AttendanceConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Converts branch entries into policies, validating weekday names.
    fn parse_branches(path: &Path, entries: Vec<BranchEntry>) -> EngineResult<Vec<BranchPolicy>> {
        entries
            .into_iter()
            .map(|entry| {
                let weekly_holiday = match entry.weekly_holiday.as_deref() {
                    None => None,
                    Some(name) => Some(name.trim().parse::<Weekday>().map_err(|_| {
                        EngineError::ConfigParseError {
                            path: path.display().to_string(),
                            message: format!(
                                "branch '{}' has unknown weekly holiday '{}'",
                                entry.name, name
                            ),
                        }
                    })?),
                };
                Ok(BranchPolicy::new(entry.name, weekly_holiday))
            })
            .collect()
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the calendar palette.
    pub fn palette(&self) -> &Palette {
        self.config.palette()
    }

    /// Returns the weekly-holiday policy for a branch name.
    pub fn branch_policy(&self, branch_name: &str) -> BranchPolicy {
        self.config.branch_policy(branch_name)
    }
}

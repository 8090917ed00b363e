//! Pipeline configuration.
//!
//! Configuration is optional: every field has a default and a missing or
//! broken config file falls back to those defaults with a warning.
//!
//! ```yaml
//! parallel: true
//! parallel_min_pixels: 65536
//! sharpen_kernel: box     # or: cross
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FilterResult;
use crate::filters::sharpen::SharpenKernel;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "PHOTOFX_CONFIG";

/// File names searched for in the working directory.
const CONFIG_FILENAMES: &[&str] = &["photofx.yml", "photofx.yaml"];

/// Tunables for the filter pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Shard neighborhood filters across the rayon pool
    pub parallel: bool,
    /// Images with fewer pixels run on the calling thread
    pub parallel_min_pixels: usize,
    /// Kernel shape used by the sharpen filter
    pub sharpen_kernel: SharpenKernel,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_min_pixels: 256 * 256,
            sharpen_kernel: SharpenKernel::Box,
        }
    }
}

impl FilterConfig {
    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(contents: &str) -> FilterResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> FilterResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Whether an image of `width * height` pixels should use rayon.
    pub fn use_parallel(&self, width: usize, height: usize) -> bool {
        self.parallel && width.saturating_mul(height) >= self.parallel_min_pixels
    }
}

/// Loaded configuration, where it came from, and anything skipped on the way.
#[derive(Debug, Clone, Default)]
pub struct FilterConfigHandle {
    pub config: FilterConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }
    if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(path));
    }
    candidates.extend(CONFIG_FILENAMES.iter().map(PathBuf::from));
    candidates
}

/// Find and load the first usable config file.
///
/// Search order: `custom_path`, `$PHOTOFX_CONFIG`, then `photofx.yml` /
/// `photofx.yaml` in the working directory. Falls back to defaults.
pub fn load_filter_config(custom_path: Option<&Path>) -> FilterConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        match FilterConfig::load(&candidate) {
            Ok(config) => {
                log::debug!("loaded filter config from {}", candidate.display());
                return FilterConfigHandle {
                    config,
                    source: Some(candidate),
                    warnings,
                };
            }
            Err(err) => {
                let message =
                    format!("Failed to load filter config {}: {}", candidate.display(), err);
                log::warn!("{message}");
                warnings.push(message);
            }
        }
    }

    FilterConfigHandle {
        config: FilterConfig::default(),
        source: None,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("photofx-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults() {
        let config = FilterConfig::default();
        assert!(config.parallel);
        assert_eq!(config.sharpen_kernel, SharpenKernel::Box);
        assert!(!config.use_parallel(10, 10));
        assert!(config.use_parallel(512, 512));
        assert!(!FilterConfig::sequential().use_parallel(4096, 4096));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = FilterConfig::from_yaml_str("sharpen_kernel: cross\n").unwrap();
        assert_eq!(config.sharpen_kernel, SharpenKernel::Cross);
        assert!(config.parallel);
        assert_eq!(config.parallel_min_pixels, 65536);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(FilterConfig::from_yaml_str("sharpen_kernel: diamond\n").is_err());
    }

    #[test]
    fn test_load_custom_path() {
        let path = temp_path("custom.yml");
        fs::write(&path, "parallel: false\nparallel_min_pixels: 10\n").unwrap();

        let handle = load_filter_config(Some(&path));

        assert_eq!(handle.source.as_deref(), Some(path.as_path()));
        assert!(!handle.config.parallel);
        assert_eq!(handle.config.parallel_min_pixels, 10);
        assert!(handle.warnings.is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_broken_file_falls_back_with_warning() {
        let path = temp_path("broken.yml");
        fs::write(&path, "parallel: [not, a, bool]\n").unwrap();

        let handle = load_filter_config(Some(&path));

        assert_eq!(handle.warnings.len(), 1);
        assert!(handle.warnings[0].contains("broken.yml"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let handle = load_filter_config(Some(&temp_path("does-not-exist.yml")));
        assert!(handle.warnings.is_empty());
    }
}

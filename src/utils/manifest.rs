//! Run configuration: the ordered list of run directories and labels.
//!
//! Runs come either from CLI lists (`DIR... --label L...`) or from a
//! TOML manifest:
//!
//! ```toml
//! suffix = ".trace"
//!
//! [[runs]]
//! label = "Honeybee 1 (edge)"
//! directory = "/data/exp1/honeybee"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::config::DEFAULT_TRACE_SUFFIX;
use super::error::ConfigError;

/// One configured run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunSpec {
    /// Column label in reports
    pub label: String,

    /// Directory holding the run's trace files
    pub directory: PathBuf,
}

/// Complete run manifest
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunManifest {
    /// Trace file suffix
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Runs in column order
    #[serde(default)]
    pub runs: Vec<RunSpec>,
}

fn default_suffix() -> String {
    DEFAULT_TRACE_SUFFIX.to_string()
}

/// Load a run manifest from a TOML file
///
/// # Errors
/// * `ConfigError::ManifestRead` - If file cannot be read
/// * `ConfigError::ManifestParse` - If TOML is invalid
/// * `ConfigError::EmptyRunList` / `ConfigError::InvalidRun` - If the runs are unusable
pub fn load_manifest(path: impl AsRef<Path>) -> Result<RunManifest, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let manifest: RunManifest = toml::from_str(&contents)?;
    validate_runs(&manifest.runs)?;
    validate_suffix(&manifest.suffix)?;
    Ok(manifest)
}

/// Reject an empty trace suffix
///
/// With no suffix every file in a run directory would count as a trace,
/// and a trace would be its own companion artifact.
pub fn validate_suffix(suffix: &str) -> Result<(), ConfigError> {
    if suffix.is_empty() {
        return Err(ConfigError::EmptySuffix);
    }
    Ok(())
}

/// Pair run directories with labels
///
/// With no labels, each directory's last path component becomes its label.
/// Otherwise the label count must equal the directory count.
pub fn build_run_specs(
    directories: &[PathBuf],
    labels: &[String],
) -> Result<Vec<RunSpec>, ConfigError> {
    if !labels.is_empty() && labels.len() != directories.len() {
        return Err(ConfigError::LabelCountMismatch {
            labels: labels.len(),
            runs: directories.len(),
        });
    }

    let runs: Vec<RunSpec> = directories
        .iter()
        .enumerate()
        .map(|(i, directory)| RunSpec {
            label: labels
                .get(i)
                .cloned()
                .unwrap_or_else(|| default_label(directory)),
            directory: directory.clone(),
        })
        .collect();

    validate_runs(&runs)?;
    Ok(runs)
}

fn default_label(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}

fn validate_runs(runs: &[RunSpec]) -> Result<(), ConfigError> {
    if runs.is_empty() {
        return Err(ConfigError::EmptyRunList);
    }
    if let Some(run) = runs.iter().find(|r| r.label.trim().is_empty()) {
        return Err(ConfigError::InvalidRun(format!(
            "empty label for directory {}",
            run.directory.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_build_run_specs_default_labels() {
        let dirs = vec![PathBuf::from("/data/exp1/honeybee"), PathBuf::from("inst")];
        let runs = build_run_specs(&dirs, &[]).unwrap();

        assert_eq!(runs[0].label, "honeybee");
        assert_eq!(runs[1].label, "inst");
    }

    #[test]
    fn test_build_run_specs_label_mismatch() {
        let dirs = vec![PathBuf::from("a"), PathBuf::from("b")];
        let err = build_run_specs(&dirs, &["only one".to_string()]).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::LabelCountMismatch { labels: 1, runs: 2 }
        ));
    }

    #[test]
    fn test_build_run_specs_empty() {
        assert!(matches!(
            build_run_specs(&[], &[]),
            Err(ConfigError::EmptyRunList)
        ));
    }

    #[test]
    fn test_load_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[runs]]
label = "Honeybee 1 (edge)"
directory = "/tmp/hb"

[[runs]]
label = "Clang SW 1"
directory = "/tmp/sw"
"#
        )
        .unwrap();

        let manifest = load_manifest(file.path()).unwrap();
        assert_eq!(manifest.suffix, ".trace");
        assert_eq!(manifest.runs.len(), 2);
        assert_eq!(manifest.runs[1].label, "Clang SW 1");
    }

    #[test]
    fn test_load_manifest_rejects_empty_suffix() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
suffix = ""

[[runs]]
label = "a"
directory = "/tmp/a"
"#
        )
        .unwrap();

        assert!(matches!(
            load_manifest(file.path()),
            Err(ConfigError::EmptySuffix)
        ));
    }

    #[test]
    fn test_load_manifest_rejects_empty_runs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "suffix = \".cov\"").unwrap();

        assert!(matches!(
            load_manifest(file.path()),
            Err(ConfigError::EmptyRunList)
        ));
    }
}

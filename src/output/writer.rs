//! Output destination handling.
//!
//! Reports go to stdout unless an output path is given.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open the report destination
///
/// `None` writes to stdout. A path is validated, its parent directories
/// are created if needed, and the file is truncated.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, OutputError> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };

    validate_output_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Writing report to: {}", path.display());
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "output path is empty").into());
    }

    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path is a directory: {}", path.display()),
        )
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_open_output_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/table.csv");

        {
            let mut writer = open_output(Some(&nested_path)).unwrap();
            writer.write_all(b"Timestamp (s)\n").unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(
            std::fs::read_to_string(&nested_path).unwrap(),
            "Timestamp (s)\n"
        );
    }
}

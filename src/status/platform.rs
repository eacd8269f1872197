//! Raspberry Pi platform detection via the device-tree model file.

use crate::error::{Result, SystemError};
use std::fs;
use std::path::{Path, PathBuf};

/// Model strings of Raspberry Pi boards all start with this prefix.
const MODEL_PREFIX: &str = "Raspberry Pi";

/// Detects whether the current host is a Raspberry Pi by inspecting the
/// device-tree model file.
#[derive(Debug, Clone)]
pub struct PlatformDetector {
    model_path: PathBuf,
}

impl Default for PlatformDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformDetector {
    /// Create a detector reading the standard device-tree model file.
    pub fn new() -> Self {
        Self {
            model_path: PathBuf::from(crate::MODEL_FILE),
        }
    }

    /// Create a detector reading an alternate model file.
    pub fn with_model_path(path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: path.into(),
        }
    }

    /// Whether this host is a Raspberry Pi.
    ///
    /// A missing model file means "not a Pi" and is not an error; a file that
    /// exists but cannot be read is an unexpected environment and propagates.
    /// The prefix comparison uses the raw file content.
    pub fn detect(&self) -> Result<bool> {
        if !self.model_path.exists() {
            return Ok(false);
        }
        let content = read_file_string(&self.model_path)?;
        Ok(content.starts_with(MODEL_PREFIX))
    }

    /// The board model string, trimmed for display.
    ///
    /// Returns `None` when the model file does not exist.
    pub fn model(&self) -> Result<Option<String>> {
        if !self.model_path.exists() {
            return Ok(None);
        }
        let content = read_file_string(&self.model_path)?;
        Ok(Some(trim_device_tree_string(&content)))
    }
}

fn read_file_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|source| SystemError::read_error(path.to_string_lossy(), source))
}

/// Device-tree strings are NUL-terminated and carry no trailing newline
/// guarantee; strip both for display.
fn trim_device_tree_string(content: &str) -> String {
    content.trim_matches('\0').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn model_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_detects_raspberry_pi_model() {
        let file = model_file(b"Raspberry Pi 4 Model B");
        let detector = PlatformDetector::with_model_path(file.path());
        assert!(detector.detect().unwrap());
    }

    #[test]
    fn test_rejects_other_model() {
        let file = model_file(b"Generic PC");
        let detector = PlatformDetector::with_model_path(file.path());
        assert!(!detector.detect().unwrap());
    }

    #[test]
    fn test_missing_file_is_not_a_pi() {
        let detector = PlatformDetector::with_model_path("/nonexistent/device-tree/model");
        assert!(!detector.detect().unwrap());
    }

    #[test]
    fn test_missing_file_has_no_model() {
        let detector = PlatformDetector::with_model_path("/nonexistent/device-tree/model");
        assert!(detector.model().unwrap().is_none());
    }

    #[test]
    fn test_model_strips_trailing_nul() {
        let file = model_file(b"Raspberry Pi 4 Model B\0");
        let detector = PlatformDetector::with_model_path(file.path());
        assert_eq!(
            detector.model().unwrap().as_deref(),
            Some("Raspberry Pi 4 Model B")
        );
        assert!(detector.detect().unwrap());
    }
}

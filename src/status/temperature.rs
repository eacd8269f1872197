//! CPU temperature from the kernel thermal zone.

use crate::error::{Result, SystemError};
use crate::status::data::Temperature;
use std::fs;
use std::path::PathBuf;

/// Reads the CPU temperature from a thermal zone file.
///
/// The file holds a single integer in millidegrees Celsius.
#[derive(Debug, Clone)]
pub struct TemperatureReader {
    temp_path: PathBuf,
}

impl Default for TemperatureReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureReader {
    /// Create a reader for the standard thermal zone file.
    pub fn new() -> Self {
        Self {
            temp_path: PathBuf::from(crate::CPU_TEMP_FILE),
        }
    }

    /// Create a reader for an alternate thermal zone file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { temp_path: path.into() }
    }

    /// Read and convert the current CPU temperature.
    pub fn read(&self) -> Result<Temperature> {
        let path = self.temp_path.to_string_lossy().to_string();
        let content = fs::read_to_string(&self.temp_path)
            .map_err(|source| SystemError::read_error(path.clone(), source))?;
        let raw = content.trim();
        let millidegrees: f64 = raw
            .parse()
            .map_err(|_| SystemError::parse_error(path, raw))?;
        Ok(Temperature::from_millidegrees(millidegrees))
    }
}

//! Data structures for hardware status.

use serde::{Deserialize, Serialize};

/// A complete snapshot of Raspberry Pi hardware status.
///
/// Built fresh on every invocation and immutable once built. Fields that
/// could not be gathered are left at their empty/absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareSnapshot {
    /// System hostname
    pub hostname: String,
    /// Board model string from the device tree (e.g., "Raspberry Pi 4 Model B")
    pub model: String,
    /// CPU temperature, absent when the thermal zone could not be read
    pub temperature: Option<Temperature>,
    /// Network interfaces in the order the listing command reported them
    pub interfaces: Vec<NetworkInterface>,
}

/// A CPU temperature reading in both units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Degrees Celsius
    pub celsius: f64,
    /// Degrees Fahrenheit
    pub fahrenheit: f64,
}

impl Temperature {
    /// Build a reading from a raw millidegree value as exposed by the kernel
    /// thermal interface.
    pub fn from_millidegrees(millidegrees: f64) -> Self {
        let celsius = millidegrees / 1000.0;
        Self {
            celsius,
            fahrenheit: celsius * 1.8 + 32.0,
        }
    }

    /// Celsius rendered to one decimal place, e.g. `42.0°C`.
    pub fn celsius_display(&self) -> String {
        format!("{:.1}\u{00b0}C", self.celsius)
    }

    /// Fahrenheit rendered to one decimal place, e.g. `107.6°F`.
    pub fn fahrenheit_display(&self) -> String {
        format!("{:.1}\u{00b0}F", self.fahrenheit)
    }
}

/// One network interface as reported by the brief interface listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Interface name (e.g., "eth0", "wlan0"); never "lo"
    pub name: String,
    /// Operational state (e.g., "UP", "DOWN", "UNKNOWN")
    pub state: String,
    /// Address with optional prefix length (e.g., "192.168.1.10/24"); may be empty
    pub address: String,
}

impl Default for HardwareSnapshot {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            model: String::new(),
            temperature: None,
            interfaces: Vec::new(),
        }
    }
}

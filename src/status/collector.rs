//! Aggregate hardware status collection.

use crate::error::Result;
use crate::status::data::HardwareSnapshot;
use crate::status::network::{InterfaceSource, IpCommandLister};
use crate::status::platform::PlatformDetector;
use crate::status::temperature::TemperatureReader;
use sysinfo::System;
use tracing::warn;

/// Composes platform, temperature, hostname and network lookups into a single
/// [`HardwareSnapshot`].
///
/// Hostname, model and temperature are optional fields: a failure in any of
/// them is reported as a warning and leaves the field empty/absent. Interface
/// listing is a required command invocation, so its failure propagates.
pub struct StatusCollector {
    platform: PlatformDetector,
    temperature: TemperatureReader,
    interfaces: Box<dyn InterfaceSource>,
}

impl Default for StatusCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCollector {
    /// Create a collector using the standard file paths and `ip` command.
    pub fn new() -> Self {
        Self {
            platform: PlatformDetector::new(),
            temperature: TemperatureReader::new(),
            interfaces: Box::new(IpCommandLister),
        }
    }

    /// Create a collector with explicit sources, for alternate paths or test
    /// doubles.
    pub fn with_sources(
        platform: PlatformDetector,
        temperature: TemperatureReader,
        interfaces: Box<dyn InterfaceSource>,
    ) -> Self {
        Self {
            platform,
            temperature,
            interfaces,
        }
    }

    /// Gather a fresh snapshot.
    pub fn collect(&self) -> Result<HardwareSnapshot> {
        let hostname = match System::host_name() {
            Some(hostname) => hostname,
            None => {
                warn!("cannot get hostname");
                String::new()
            }
        };

        let model = match self.platform.model() {
            Ok(Some(model)) => model,
            Ok(None) => {
                warn!("cannot get model, are you sure this is a Raspberry Pi?");
                String::new()
            }
            Err(err) => {
                warn!("cannot get model: {}", err);
                String::new()
            }
        };

        let temperature = match self.temperature.read() {
            Ok(temperature) => Some(temperature),
            Err(err) => {
                warn!("cannot get CPU temperature: {}", err);
                None
            }
        };

        let interfaces = self.interfaces.list()?;

        Ok(HardwareSnapshot {
            hostname,
            model,
            temperature,
            interfaces,
        })
    }
}

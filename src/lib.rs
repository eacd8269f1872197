//! # rpi-info - Raspberry Pi Hardware Status
//!
//! A small Rust crate for reading Raspberry Pi hardware status: device model,
//! CPU temperature, hostname, and network interface state. Everything comes
//! from the Linux virtual filesystem (`/proc`, `/sys`) and from the output of
//! `ip -brief address`, so it only does something useful on a Raspberry Pi
//! running Linux.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rpi_info::{render, Selection, StatusCollector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let collector = StatusCollector::new();
//!     let snapshot = collector.collect()?;
//!     println!("{}", render(&snapshot, Selection::default()));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod status;

// Re-export public API
pub use error::{Result, SystemError};
pub use status::{
    collector::StatusCollector,
    data::{HardwareSnapshot, NetworkInterface, Temperature},
    network::{InterfaceSource, IpCommandLister},
    platform::PlatformDetector,
    render::{render, render_full, Selection},
    temperature::TemperatureReader,
};

/// Device-tree file holding the board model string.
pub const MODEL_FILE: &str = "/proc/device-tree/model";

/// Thermal zone file holding the CPU temperature in millidegrees Celsius.
pub const CPU_TEMP_FILE: &str = "/sys/class/thermal/thermal_zone0/temp";

//! Hardware status collection and rendering.
//!
//! This module provides the core functionality for reading Raspberry Pi
//! status: platform detection, CPU temperature, network interface state,
//! and the aggregate snapshot plus its plain-text rendering.

pub mod collector;
pub mod data;
pub mod network;
pub mod platform;
pub mod render;
pub mod temperature;

// Re-export commonly used items
pub use collector::StatusCollector;
pub use data::HardwareSnapshot;
pub use network::{InterfaceSource, IpCommandLister};
pub use platform::PlatformDetector;
pub use temperature::TemperatureReader;

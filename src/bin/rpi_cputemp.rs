//! rpi-cputemp - Raspberry Pi CPU Temperature Binary
//!
//! Prints the CPU temperature of the local Raspberry Pi and nothing else.
//! Unlike `rpi-info`, a temperature read or parse failure here is fatal:
//! the temperature is the whole point of this program.

use anyhow::Result;
use clap::Parser;
use rpi_info::{PlatformDetector, TemperatureReader};

#[derive(Parser)]
#[command(name = "rpi-cputemp")]
#[command(about = "Raspberry Pi CPU temperature")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Also show the temperature in Fahrenheit
    #[arg(short = 'f', long)]
    fahrenheit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let detector = PlatformDetector::new();
    if !detector.detect()? {
        println!("This program reports a Raspberry Pi CPU temperature.");
        println!("It works only on a Raspberry Pi!");
        return Ok(());
    }

    let temperature = TemperatureReader::new().read()?;
    if cli.fahrenheit {
        println!(
            "{} {}",
            temperature.celsius_display(),
            temperature.fahrenheit_display()
        );
    } else {
        println!("{}", temperature.celsius_display());
    }

    Ok(())
}

//! rpi-info - Raspberry Pi Hardware Status Binary
//!
//! Prints hostname, board model, CPU temperature and network interface state
//! for the local Raspberry Pi.

use anyhow::Result;
use clap::{ArgAction, Parser};
use rpi_info::{render, PlatformDetector, Selection, StatusCollector};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "rpi-info")]
#[command(about = "Raspberry Pi hardware status")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_help_flag = true)]
struct Cli {
    /// Show hostname
    #[arg(short = 'h')]
    hostname: bool,

    /// Show Raspberry Pi model
    #[arg(short = 'm')]
    model: bool,

    /// Show temperature
    #[arg(short = 't')]
    temperature: bool,

    /// Show temperature (Celsius only)
    #[arg(short = 'c')]
    celsius: bool,

    /// Show temperature (Fahrenheit only)
    #[arg(short = 'f')]
    fahrenheit: bool,

    /// Show networking
    #[arg(short = 'n')]
    networking: bool,

    /// Show all information
    #[arg(short = 'a')]
    all: bool,

    /// Output format: pretty or json
    #[arg(long, default_value = "pretty")]
    format: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Print help
    #[arg(long, action = ArgAction::HelpLong)]
    help: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let detector = PlatformDetector::new();
    if !detector.detect()? {
        println!("This program reports Raspberry Pi hardware status.");
        println!("It works only on a Raspberry Pi!");
        return Ok(());
    }

    let collector = StatusCollector::new();
    let snapshot = collector.collect()?;

    match cli.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        "pretty" => {
            let selection = Selection {
                hostname: cli.hostname,
                model: cli.model,
                temperature: cli.temperature,
                celsius: cli.celsius,
                fahrenheit: cli.fahrenheit,
                networking: cli.networking,
                all: cli.all,
            };
            println!("{}", render(&snapshot, selection));
        }
        other => {
            anyhow::bail!("unsupported format: {}. Use 'json' or 'pretty'", other);
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        LevelFilter::DEBUG
    } else if cli.verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["rpi-info", "-c"]).unwrap();
        assert!(cli.celsius);
        assert!(!cli.hostname);
    }

    #[test]
    fn test_h_selects_hostname_not_help() {
        let cli = Cli::try_parse_from(["rpi-info", "-h"]).unwrap();
        assert!(cli.hostname);
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::try_parse_from(["rpi-info"]).unwrap();
        assert!(!cli.all);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_flags_combine() {
        let cli = Cli::try_parse_from(["rpi-info", "-t", "-n"]).unwrap();
        assert!(cli.temperature);
        assert!(cli.networking);
        assert!(!cli.model);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(Cli::try_parse_from(["rpi-info", "-x"]).is_err());
    }
}

//! # OSD Layout
//!
//! Dumps the resolved OSD layout as JSON.
//!
//! ```text
//! osd-layout [CONFIG] [MASK]
//! ```
//!
//! CONFIG is an optional TOML file; without it the built-in layout and default
//! flight mode formatting are used. MASK is an optional DJI mode bitmask
//! (decimal, `0b` or `0x` prefixed) whose flight mode text is added to the
//! output.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use osd_layout::config::Config;
use osd_layout::flight_mode::{decode_dji_mask, display_string, reserved_bits};
use osd_layout::osd::{LayoutEntry, PositionTable};

/// JSON document written to stdout
#[derive(Debug, Serialize)]
struct LayoutDump {
    layout: Vec<LayoutEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flight_mode: Option<FlightModeDump>,
}

#[derive(Debug, Serialize)]
struct FlightModeDump {
    mask: u8,
    flags: Vec<String>,
    text: String,
}

/// Main entry point for the layout dump tool
///
/// # Errors
///
/// Returns error if:
/// - The config file cannot be loaded or fails validation
/// - The mask argument is not a valid 8-bit number
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug cargo run -- config/osd.toml 0b11
/// ```
fn main() -> Result<()> {
    // Initialize logging (stderr, stdout carries the JSON)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("OSD Layout v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => {
            let config = Config::load(&path)
                .with_context(|| format!("failed to load config from {}", path))?;
            info!("Loaded configuration from {}", path);
            config
        }
        None => {
            info!("No config given, using built-in layout");
            Config::default()
        }
    };

    let mask = args
        .next()
        .map(|arg| parse_mask(&arg).with_context(|| format!("invalid mode mask '{}'", arg)))
        .transpose()?;

    let table = PositionTable::from_config(&config.osd)?;
    info!("{} elements placed on the OSD grid", table.placements().count());

    let flight_mode = mask.map(|mask| {
        if reserved_bits(mask) != 0 {
            warn!("Mask 0x{:02X} sets reserved bits, they are ignored", mask);
        }

        FlightModeDump {
            mask,
            flags: decode_dji_mask(mask)
                .flags()
                .map(|flag| format!("{:?}", flag))
                .collect(),
            text: display_string(
                mask,
                &config.flight_mode.flag_names,
                &config.flight_mode.format,
            ),
        }
    });

    let dump = LayoutDump {
        layout: table.entries(),
        flight_mode,
    };

    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}

/// Parse an 8-bit mask given as decimal, `0b...` or `0x...`
fn parse_mask(arg: &str) -> Result<u8> {
    let arg = arg.trim();

    let value = if let Some(bits) = arg.strip_prefix("0b") {
        u8::from_str_radix(&bits.replace('_', ""), 2)?
    } else if let Some(hex) = arg.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)?
    } else {
        arg.parse::<u8>()?
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mask_decimal() {
        assert_eq!(parse_mask("3").unwrap(), 3);
        assert_eq!(parse_mask(" 255 ").unwrap(), 255);
    }

    #[test]
    fn test_parse_mask_binary() {
        assert_eq!(parse_mask("0b11").unwrap(), 3);
        assert_eq!(parse_mask("0b0010_0001").unwrap(), 0x21);
    }

    #[test]
    fn test_parse_mask_hex() {
        assert_eq!(parse_mask("0x3F").unwrap(), 63);
    }

    #[test]
    fn test_parse_mask_invalid() {
        assert!(parse_mask("256").is_err());
        assert!(parse_mask("0b102").is_err());
        assert!(parse_mask("acro").is_err());
    }

    #[test]
    fn test_dump_serialization() {
        let dump = LayoutDump {
            layout: Vec::new(),
            flight_mode: Some(FlightModeDump {
                mask: 3,
                flags: vec!["ArmAcro".to_string(), "Stab".to_string()],
                text: "ACRO STAB".to_string(),
            }),
        };
        let json = serde_json::to_string(&dump).unwrap();
        assert_eq!(
            json,
            r#"{"layout":[],"flight_mode":{"mask":3,"flags":["ArmAcro","Stab"],"text":"ACRO STAB"}}"#
        );
    }
}

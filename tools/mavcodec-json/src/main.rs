// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! mavcodec-json CLI
//!
//! Command-line tool to inspect MAVLink dialects and convert payloads
//! between wire bytes and JSON.
//!
//! # Usage
//!
//! ```bash
//! # List messages of the built-in common subset
//! mavcodec-json list
//!
//! # Show the wire layout of a message
//! mavcodec-json inspect PARAM_VALUE
//!
//! # Decode a V2 payload (hex) to JSON
//! mavcodec-json decode 74 "00409a44 00409a44 00409a44 00409a44 0c007b"
//!
//! # Encode JSON to a V1 payload
//! mavcodec-json --v1 encode VFR_HUD '{"airspeed": 12.5, "heading": 90}'
//!
//! # JSON Schema for a message
//! mavcodec-json schema STATUSTEXT --topic vehicle/status
//!
//! # Using a configuration file
//! mavcodec-json --config mavcodec.toml list
//! ```

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::{ToolConfig, WireVersion};
use mavcodec::dynamic::{schema_for, DialectTable, DynamicMessage};
use mavcodec::{MavlinkVersion, MessageDescriptor};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// MAVLink payload <-> JSON converter
#[derive(Parser, Debug)]
#[command(name = "mavcodec-json")]
#[command(about = "Decode, encode and describe MAVLink payloads as JSON")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON dialect definition table (defaults to the built-in common subset)
    #[arg(short, long)]
    dialect: Option<PathBuf>,

    /// Use MAVLink 1 framing rules
    #[arg(long)]
    v1: bool,

    /// Compact JSON output
    #[arg(long)]
    compact: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every message of the dialect
    List,

    /// Show the wire-ordered fields of a message
    Inspect {
        /// Message id or name
        message: String,
    },

    /// Decode a hex payload to JSON
    Decode {
        /// Message id or name
        message: String,
        /// Payload bytes as hex (whitespace and ':' ignored), '-' for stdin
        payload: String,
    },

    /// Encode a JSON object to a hex payload
    Encode {
        /// Message id or name
        message: String,
        /// JSON object, '-' for stdin
        json: String,
    },

    /// Print the JSON Schema of a message
    Schema {
        /// Message id or name
        message: String,
        /// Topic used in the schema id (defaults to the message name)
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Generate example configuration file
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "mavcodec.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;

    // Initialize logging
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::GenConfig { output } = &args.command {
        return cmd_gen_config(output);
    }

    let table = load_dialect(&config)?;
    let version = MavlinkVersion::from(config.version);

    match args.command {
        Commands::List => cmd_list(&table),
        Commands::Inspect { message } => cmd_inspect(&table, &message),
        Commands::Decode { message, payload } => {
            cmd_decode(&table, &config, version, &message, &payload)
        }
        Commands::Encode { message, json } => cmd_encode(&table, version, &message, &json),
        Commands::Schema { message, topic } => {
            cmd_schema(&table, &config, &message, topic.as_deref())
        }
        Commands::GenConfig { .. } => Ok(()),
    }
}

fn build_config(args: &Args) -> Result<ToolConfig> {
    let mut config = match args.config {
        Some(ref path) => ToolConfig::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => ToolConfig::default(),
    };

    if let Some(ref dialect) = args.dialect {
        config.dialect = Some(dialect.clone());
    }
    if args.v1 {
        config.version = WireVersion::V1;
    }
    if args.compact {
        config.pretty = false;
    }
    if let Some(ref level) = args.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;
    Ok(config)
}

fn load_dialect(config: &ToolConfig) -> Result<DialectTable> {
    let table = match config.dialect {
        Some(ref path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading dialect {}", path.display()))?;
            DialectTable::from_json(&text)
                .with_context(|| format!("loading dialect {}", path.display()))?
        }
        None => DialectTable::common()?,
    };
    info!(
        "Dialect {} v{}: {} messages",
        table.name(),
        table.version(),
        table.len()
    );
    Ok(table)
}

/// Resolve a message given as numeric id or wire name.
fn lookup<'a>(table: &'a DialectTable, key: &str) -> Result<&'a Arc<MessageDescriptor>> {
    let found = match key.parse::<u32>() {
        Ok(id) => table.get(id),
        Err(_) => table.get_by_name(&key.to_ascii_uppercase()),
    };
    match found {
        Some(desc) => Ok(desc),
        None => bail!("message '{}' is not defined in dialect {}", key, table.name()),
    }
}

/// Read an argument, or stdin when it is '-'.
fn read_arg(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn render(json: &serde_json::Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(json)?
    } else {
        serde_json::to_string(json)?
    })
}

fn cmd_list(table: &DialectTable) -> Result<()> {
    println!(
        "{:>8}  {:<28} {:>6} {:>8} {:>9}",
        "ID", "NAME", "SIZE", "EXT SIZE", "CRC_EXTRA"
    );
    for desc in table.messages() {
        println!(
            "{:>8}  {:<28} {:>6} {:>8} {:>9}",
            desc.id(),
            desc.name(),
            desc.size_normal(),
            desc.size_extended(),
            desc.crc_extra()
        );
    }
    Ok(())
}

fn cmd_inspect(table: &DialectTable, key: &str) -> Result<()> {
    let desc = lookup(table, key)?;
    println!(
        "{} (id {}) size {}/{} crc_extra {}",
        desc.name(),
        desc.id(),
        desc.size_normal(),
        desc.size_extended(),
        desc.crc_extra()
    );
    println!();

    let mut offset = 0;
    for field in desc.fields() {
        let mut flags = String::new();
        if field.is_enum {
            flags.push_str(" enum");
        }
        if field.is_extension {
            flags.push_str(" extension");
        }
        println!(
            "  {:>4}  {:<40} {:<12} #{}{}",
            offset,
            field.name,
            field.type_label(),
            field.index,
            flags
        );
        offset += field.size();
    }
    Ok(())
}

fn cmd_decode(
    table: &DialectTable,
    config: &ToolConfig,
    version: MavlinkVersion,
    key: &str,
    payload: &str,
) -> Result<()> {
    let desc = lookup(table, key)?;
    let bytes = parse_hex(&read_arg(payload)?)?;
    debug!("Decoding {} bytes as {} ({})", bytes.len(), desc.name(), version);

    let msg = DynamicMessage::decode(Arc::clone(desc), &bytes, version)?;
    println!("{}", render(&msg.to_json()?, config.pretty)?);
    Ok(())
}

fn cmd_encode(table: &DialectTable, version: MavlinkVersion, key: &str, json: &str) -> Result<()> {
    let desc = lookup(table, key)?;
    let mut msg = DynamicMessage::new(Arc::clone(desc));
    msg.unmarshal_json(&read_arg(json)?)
        .with_context(|| format!("parsing {} fields", desc.name()))?;

    let bytes = table.encode(&msg, version)?;
    debug!("Encoded {} to {} bytes ({})", desc.name(), bytes.len(), version);
    println!("{}", format_hex(&bytes));
    Ok(())
}

fn cmd_schema(
    table: &DialectTable,
    config: &ToolConfig,
    key: &str,
    topic: Option<&str>,
) -> Result<()> {
    let desc = lookup(table, key)?;
    let topic = topic.unwrap_or_else(|| desc.name());
    let schema = schema_for(desc, &config.schema_prefix, topic);
    println!("{}", render(&schema, config.pretty)?);
    Ok(())
}

fn cmd_gen_config(output: &Path) -> Result<()> {
    let text = ToolConfig::default().to_toml()?;
    let header = "# mavcodec-json configuration\n\
                  # dialect = \"path/to/dialect.json\"  (built-in common subset when absent)\n\n";
    std::fs::write(output, format!("{}{}", header, text))
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Parse hex digits, ignoring whitespace, ':' and an optional `0x` prefix.
fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex payload '{}'", digits))
}

/// Lowercase hex, one space between bytes.
fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| hex::encode([*b])).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0c007b").unwrap(), vec![0x0C, 0x00, 0x7B]);
        assert_eq!(parse_hex("0x0C 00:7B\n").unwrap(), vec![0x0C, 0x00, 0x7B]);
        assert!(parse_hex("0c0").is_err());
        assert!(parse_hex("zz").is_err());
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x00, 0x40, 0x9A]), "00 40 9a");
        assert_eq!(format_hex(&[]), "");
        let bytes = [0x00, 0x7B, 0xFF, 0x10];
        assert_eq!(parse_hex(&format_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let table = DialectTable::common().unwrap();
        assert_eq!(lookup(&table, "74").unwrap().name(), "VFR_HUD");
        assert_eq!(lookup(&table, "vfr_hud").unwrap().id(), 74);
        assert!(lookup(&table, "NOPE").is_err());
    }

    #[test]
    fn test_hex_payload_decodes() {
        let table = DialectTable::common().unwrap();
        let desc = lookup(&table, "VFR_HUD").unwrap();
        let bytes =
            parse_hex("00409a44 00409a44 00409a44 00409a44 0c007b").unwrap();
        let msg = DynamicMessage::decode(Arc::clone(desc), &bytes, MavlinkVersion::V2).unwrap();
        let json = msg.to_json().unwrap();
        assert_eq!(json["heading"], 12);
        assert_eq!(json["throttle"], 123);
        assert_eq!(json["airspeed"], 1234.0);
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from([
            "mavcodec-json",
            "--v1",
            "schema",
            "STATUSTEXT",
            "--topic",
            "vehicle/status",
        ])
        .unwrap();
        assert!(args.v1);
        assert!(matches!(args.command, Commands::Schema { ref topic, .. } if topic.as_deref() == Some("vehicle/status")));

        let config = build_config(&args).unwrap();
        assert_eq!(config.version, WireVersion::V1);
    }
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serialport::{DataBits, Parity, StopBits};
use ubx_nmea::UbxMessage;

use crate::device::{DeviceConfig, PortSelection, DEFAULT_RASPI_MARKER};

pub fn build_cli() -> Command {
    Command::new("ubx-nmea")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Reads the interleaved UBX + NMEA stream of a u-blox receiver")
        .arg(
            Arg::new("port")
                .value_name("port")
                .short('p')
                .long("port")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Serial port to open, overrides the raspi marker lookup"),
        )
        .arg(
            Arg::new("raspi-marker")
                .value_name("path")
                .long("raspi-marker")
                .required(false)
                .default_value(DEFAULT_RASPI_MARKER)
                .value_parser(value_parser!(PathBuf))
                .help("File whose presence selects /dev/serial0 instead of /dev/ttyAMA0"),
        )
        .arg(
            Arg::new("baud")
                .value_name("baud")
                .short('s')
                .long("baud")
                .required(false)
                .default_value("9600")
                .value_parser(value_parser!(u32))
                .help("Baud rate of the port to open"),
        )
        .arg(
            Arg::new("stop-bits")
                .long("stop-bits")
                .help("Number of stop bits to use for open port")
                .required(false)
                .value_parser(["1", "2"])
                .default_value("1"),
        )
        .arg(
            Arg::new("data-bits")
                .long("data-bits")
                .help("Number of data bits to use for open port")
                .required(false)
                .value_parser(["7", "8"])
                .default_value("8"),
        )
        .arg(
            Arg::new("parity")
                .long("parity")
                .help("Parity to use for open port")
                .required(false)
                .value_parser(["even", "odd"]),
        )
        .arg(
            Arg::new("validate-checksum")
                .long("validate-checksum")
                .action(ArgAction::SetTrue)
                .help("Drop UBX frames whose checksum does not match"),
        )
        .arg(
            Arg::new("raw-nmea")
                .long("raw-nmea")
                .action(ArgAction::SetTrue)
                .help("Print NMEA sentences as text instead of decoding them"),
        )
        .subcommand(Command::new("monitor").about("Print every message read from the device (default)"))
        .subcommand(
            Command::new("replay")
                .about("Parse a capture file in random chunk sizes, as a serial port would deliver it")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Capture to replay, '-' for stdin"),
                ),
        )
        .subcommand(
            Command::new("send")
                .about("Serialize a UBX command and write it to the device")
                .arg(
                    Arg::new("class")
                        .long("class")
                        .required(true)
                        .value_parser(parse_byte)
                        .help("Message class, decimal or 0x prefixed hex"),
                )
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(parse_byte)
                        .help("Message id, decimal or 0x prefixed hex"),
                )
                .arg(
                    Arg::new("payload")
                        .long("payload")
                        .required(false)
                        .help("Payload as a hex string, e.g. f00501"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Print the serialized bytes instead of sending them"),
                ),
        )
}

fn parse_byte(value: &str) -> Result<u8, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|e| format!("'{}' is not a byte: {}", value, e))
}

pub fn device_config(matches: &ArgMatches) -> Result<DeviceConfig> {
    let port = match matches.get_one::<PathBuf>("port") {
        Some(path) => PortSelection::Explicit(path.clone()),
        None => {
            let marker = matches
                .get_one::<PathBuf>("raspi-marker")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RASPI_MARKER));
            PortSelection::RaspiMarker(marker)
        },
    };

    let baud_rate = matches.get_one::<u32>("baud").cloned().unwrap_or(9600);
    let stop_bits = match matches.get_one::<String>("stop-bits").map(|s| s.as_str()) {
        Some("2") => StopBits::Two,
        _ => StopBits::One,
    };
    let data_bits = match matches.get_one::<String>("data-bits").map(|s| s.as_str()) {
        Some("7") => DataBits::Seven,
        Some("8") | None => DataBits::Eight,
        Some(other) => bail!("Number of DataBits supported by uBlox is either 7 or 8, got {other}"),
    };
    let parity = match matches.get_one::<String>("parity").map(|s| s.as_str()) {
        Some("odd") => Parity::Odd,
        Some("even") => Parity::Even,
        _ => Parity::None,
    };

    Ok(DeviceConfig {
        port,
        baud_rate,
        stop_bits,
        data_bits,
        parity,
    })
}

/// Builds the message described by the `send` subcommand
pub fn ubx_message(sub_matches: &ArgMatches) -> Result<UbxMessage> {
    let class = sub_matches
        .get_one::<u8>("class")
        .copied()
        .context("missing message class")?;
    let id = sub_matches
        .get_one::<u8>("id")
        .copied()
        .context("missing message id")?;
    let payload = sub_matches
        .get_one::<String>("payload")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let payload = hex::decode(payload).with_context(|| format!("invalid hex payload {payload:?}"))?;
    Ok(UbxMessage::from_class_id(class, id, payload)?)
}

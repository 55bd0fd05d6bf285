use std::{
    fmt::Debug,
    fs::File,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use ubx_nmea::{
    NmeaDecoder, NmeaSentenceDecoder, ParsedMessage, Parser, ParserBuilder, RawNmeaDecoder,
};

mod cli;
mod device;
mod replay;

use device::Device;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = cli::build_cli().get_matches();
    if matches.get_flag("raw-nmea") {
        run(&matches, RawNmeaDecoder)
    } else {
        run(&matches, NmeaSentenceDecoder)
    }
}

fn run<D>(matches: &ArgMatches, decoder: D) -> Result<()>
where
    D: NmeaDecoder,
    D::Sentence: Debug,
{
    let parser = ParserBuilder::new()
        .with_decoder(decoder)
        .with_checksum_validation(matches.get_flag("validate-checksum"))
        .with_vec_buffer();

    match matches.subcommand() {
        Some(("replay", sub_matches)) => {
            let file = sub_matches
                .get_one::<std::path::PathBuf>("file")
                .context("missing capture file")?;
            replay_capture(file, parser)
        },
        Some(("send", sub_matches)) => {
            let message = cli::ubx_message(sub_matches)?;
            if sub_matches.get_flag("dry-run") {
                println!("{}", hex::encode(message.serialize()));
                return Ok(());
            }
            let config = cli::device_config(matches)?;
            let mut device = Device::new(config.open()?, parser);
            device
                .send(&message)
                .context("Failed to write the message to the device")?;
            info!(
                "sent class 0x{:02x} id 0x{:02x}, {} bytes",
                message.class(),
                message.id(),
                message.serialized_len()
            );
            Ok(())
        },
        _ => {
            let config = cli::device_config(matches)?;
            let mut device = Device::new(config.open()?, parser);
            loop {
                device
                    .process(&mut print_message::<D::Sentence>)
                    .context("Failed to read from the device")?;
            }
        },
    }
}

fn replay_capture<D>(file: &Path, mut parser: Parser<D>) -> Result<()>
where
    D: NmeaDecoder,
    D::Sentence: Debug,
{
    let reader: Box<dyn Read> = if file == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let f = File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;
        Box::new(io::BufReader::new(f))
    };

    let stats = replay::replay(
        reader,
        &mut parser,
        replay::random_chunk_sizes(),
        &mut print_message::<D::Sentence>,
    )
    .context("Failed to read the capture")?;
    info!(
        "{} bytes: {} UBX frames, {} NMEA sentences, {} errors, {} bytes left over",
        stats.bytes, stats.ubx, stats.nmea, stats.errors, stats.leftover
    );
    Ok(())
}

fn print_message<S: Debug>(message: ParsedMessage<S>) {
    println!("{}", describe(&message));
}

fn describe<S: Debug>(message: &ParsedMessage<S>) -> String {
    match message {
        ParsedMessage::Ubx(frame) => format!(
            "UBX class=0x{:02x} id=0x{:02x} len={} payload={}",
            frame.class(),
            frame.msg_id(),
            frame.payload_len(),
            hex::encode(frame.payload())
        ),
        ParsedMessage::Nmea(sentence) => format!("NMEA {:?}", sentence),
    }
}

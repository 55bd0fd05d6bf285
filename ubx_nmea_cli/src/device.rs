use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use ubx_nmea::{NmeaDecoder, ParsedMessage, Parser, ParserError, UbxMessage};

/// GPS serial port on a Raspberry Pi 3
pub const RASPI3_PORT: &str = "/dev/serial0";
/// GPS serial port on a Raspberry Pi 2
pub const RASPI2_PORT: &str = "/dev/ttyAMA0";
/// File whose presence marks a Raspberry Pi 3
pub const DEFAULT_RASPI_MARKER: &str = "/its_raspi3";

const READ_TIMEOUT: Duration = Duration::from_millis(10);
const MAX_READ_LEN: usize = 1240;

/// How the serial device path is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSelection {
    Explicit(PathBuf),
    /// [RASPI3_PORT] if the marker file exists, [RASPI2_PORT] otherwise
    RaspiMarker(PathBuf),
}

impl PortSelection {
    pub fn resolve(&self) -> PathBuf {
        match self {
            Self::Explicit(path) => path.clone(),
            Self::RaspiMarker(marker) => {
                let port = if marker.exists() {
                    RASPI3_PORT
                } else {
                    RASPI2_PORT
                };
                debug!("raspi marker {} selects {}", marker.display(), port);
                PathBuf::from(port)
            },
        }
    }
}

impl Default for PortSelection {
    fn default() -> Self {
        Self::RaspiMarker(PathBuf::from(DEFAULT_RASPI_MARKER))
    }
}

/// Everything needed to open the receiver's serial port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub port: PortSelection,
    pub baud_rate: u32,
    pub stop_bits: StopBits,
    pub data_bits: DataBits,
    pub parity: Parity,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            port: PortSelection::default(),
            baud_rate: 9600,
            stop_bits: StopBits::One,
            data_bits: DataBits::Eight,
            parity: Parity::None,
        }
    }
}

impl DeviceConfig {
    pub fn open(&self) -> Result<Box<dyn SerialPort>> {
        let path = self.port.resolve();
        let builder = serialport::new(path_str(&path), self.baud_rate)
            .stop_bits(self.stop_bits)
            .data_bits(self.data_bits)
            .timeout(READ_TIMEOUT)
            .parity(self.parity)
            .flow_control(FlowControl::None);

        debug!("{:?}", &builder);
        let port = builder
            .open()
            .with_context(|| format!("Failed to open port: {}", path.display()))?;
        info!("opened {} at {} baud", path.display(), self.baud_rate);
        Ok(port)
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub trait MessageHandler<S> {
    fn handle(&mut self, message: ParsedMessage<S>);

    fn malformed(&mut self, error: ParserError) {
        warn!("Malformed message, ignore it; cause {error}");
    }
}

/// Implement handler for simple callbacks / closures
impl<S, F: FnMut(ParsedMessage<S>)> MessageHandler<S> for F {
    fn handle(&mut self, message: ParsedMessage<S>) {
        self(message)
    }
}

/// A receiver connected through `port`, usually a serial port
pub struct Device<P: Read + Write, D: NmeaDecoder> {
    port: P,
    parser: Parser<D>,
}

impl<P: Read + Write, D: NmeaDecoder> Device<P, D> {
    pub fn new(port: P, parser: Parser<D>) -> Self {
        Self { port, parser }
    }

    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)
    }

    pub fn send(&mut self, message: &UbxMessage) -> io::Result<()> {
        self.write_all(&message.serialize())?;
        self.port.flush()
    }

    /// Reads until the port has nothing more to give and hands every message to
    /// `handler`. Returns the number of messages handled.
    pub fn process(&mut self, handler: &mut impl MessageHandler<D::Sentence>) -> io::Result<usize> {
        let mut handled = 0;
        let mut local_buf = [0; MAX_READ_LEN];
        loop {
            let nbytes = self.read_port(&mut local_buf)?;
            if nbytes == 0 {
                break;
            }

            for message in self.parser.consume(&local_buf[..nbytes]) {
                match message {
                    Ok(message) => {
                        handled += 1;
                        handler.handle(message);
                    },
                    Err(e) => handler.malformed(e),
                }
            }
        }
        Ok(handled)
    }

    pub fn parser(&self) -> &Parser<D> {
        &self.parser
    }

    /// Reads the serial port, converting timeouts into "no data received"
    fn read_port(&mut self, output: &mut [u8]) -> io::Result<usize> {
        match self.port.read(output) {
            Ok(b) => Ok(b),
            Err(e) => {
                if e.kind() == io::ErrorKind::TimedOut {
                    Ok(0)
                } else {
                    Err(e)
                }
            },
        }
    }
}

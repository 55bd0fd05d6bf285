use std::io::{self, Read};

use log::debug;
use rand::RngExt;
use ubx_nmea::{NmeaDecoder, Parser};

use crate::device::MessageHandler;

/// Upper bound (exclusive) of a replayed chunk
pub const MAX_CHUNK: usize = 100;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub bytes: usize,
    pub ubx: usize,
    pub nmea: usize,
    pub errors: usize,
    /// Bytes left in the parser once the input is exhausted
    pub leftover: usize,
}

/// Endless sequence of chunk sizes in `1..MAX_CHUNK`
pub fn random_chunk_sizes() -> impl Iterator<Item = usize> {
    let mut rng = rand::rng();
    std::iter::repeat_with(move || rng.random_range(1..MAX_CHUNK))
}

/// Feeds a capture to `parser`, reading it in chunks of the given sizes, the
/// way a serial port hands data over.
pub fn replay<R: Read, D: NmeaDecoder>(
    mut reader: R,
    parser: &mut Parser<D>,
    chunk_sizes: impl IntoIterator<Item = usize>,
    handler: &mut impl MessageHandler<D::Sentence>,
) -> io::Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    let mut local_buf = [0; MAX_CHUNK];
    for size in chunk_sizes {
        let size = size.clamp(1, MAX_CHUNK);
        let nbytes = read_chunk(&mut reader, &mut local_buf[..size])?;
        if nbytes == 0 {
            break;
        }
        stats.bytes += nbytes;

        for message in parser.consume(&local_buf[..nbytes]) {
            match message {
                Ok(message) => {
                    if message.is_ubx() {
                        stats.ubx += 1;
                    } else {
                        stats.nmea += 1;
                    }
                    handler.handle(message);
                },
                Err(e) => {
                    stats.errors += 1;
                    handler.malformed(e);
                },
            }
        }
    }
    stats.leftover = parser.buffer_len();
    debug!("replay done: {:?}", stats);
    Ok(stats)
}

/// Fills `buf` unless the input ends first
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

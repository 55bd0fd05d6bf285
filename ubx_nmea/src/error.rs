use thiserror::Error;

/// Errors reported while pulling messages out of the stream.
///
/// Incomplete data is never an error: the parser simply reports that
/// nothing can be extracted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// A complete, CRLF-terminated sentence was extracted but the NMEA
    /// decoder refused it. The sentence is consumed.
    #[error("failed to decode NMEA sentence {sentence:?}: {reason}")]
    NmeaDecode { sentence: String, reason: String },

    /// Only reported when checksum validation is enabled.
    #[error("Not valid packet's checksum, expect {expect:x}, got {got:x}")]
    InvalidChecksum { expect: u16, got: u16 },

    /// The underlying buffer cannot hold `required_size` bytes.
    #[error("Insufficient buffer space, {required_size} bytes required")]
    OutOfMemory { required_size: usize },
}

/// Errors raised while building an outbound UBX message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SerializeError {
    #[error("UBX payload of {len} bytes does not fit the 16 bit length field")]
    PayloadTooLarge { len: usize },
}

//! # ubx_nmea
//!
//! Demultiplexer for the byte stream of a u-blox GPS receiver, where binary UBX
//! frames and NMEA sentences arrive interleaved on the same serial line.
//!
//! A command line front-end lives in the `ubx_nmea_cli` crate of this workspace.
//!
//! Parsing Messages
//! ================
//!
//! Parsing happens by instantiating a `Parser` object and then adding data into it
//! using its `consume()` method. Data is copied into the parser's internal buffer and
//! an iterator is returned over the messages that are complete so far. Partial
//! messages stay in the buffer until the next chunk arrives. For example:
//! ```
//! use ubx_nmea::{ParsedMessage, Parser};
//!
//! let mut parser = Parser::default();
//! let my_raw_data = b"\x00\x01$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n";
//! let mut it = parser.consume(my_raw_data);
//! loop {
//!     match it.next() {
//!         Some(Ok(ParsedMessage::Ubx(frame))) => {
//!             // A complete UBX frame, class and id in frame.class() / frame.msg_id()
//!         }
//!         Some(Ok(ParsedMessage::Nmea(sentence))) => {
//!             // A sentence decoded by the nmea crate
//!         }
//!         Some(Err(_)) => {
//!             // Received a malformed message
//!         }
//!         None => {
//!             // Nothing more can be extracted for now
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! Bytes that precede the next `$` or `0xb5 0x62` marker are dropped as noise.
//! Use a [RawNmeaDecoder] (via [ParserBuilder]) to get the sentence text without
//! interpreting it.
//!
//! Constructing Packets
//! ====================
//!
//! Outbound commands are built with [UbxMessage]:
//! ```
//! use ubx_nmea::UbxMessage;
//!
//! // UBX-MON-VER poll request
//! let poll = UbxMessage::from_class_id(0x0a, 0x04, Vec::<u8>::new()).unwrap();
//! assert_eq!(
//!     poll.serialize(),
//!     [0xb5, 0x62, 0x0a, 0x04, 0x00, 0x00, 0x0e, 0x34, 0x10, 0x13]
//! );
//! ```
//!
//! Bounded memory
//! ==============
//!
//! The default parser grows its buffer as needed. To bound the memory held by the
//! parser, use a [FixedBuffer]:
//! ```
//! let mut parser = ubx_nmea::ParserBuilder::new().with_fixed_buffer::<1024>();
//! assert!(parser.feed(&[0u8; 2048]).is_err());
//! ```
//! Frames that can never fit the buffer are reported as [ParserError::OutOfMemory]
//! and skipped.

#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    decoder::{NmeaDecodeError, NmeaDecoder, NmeaSentenceDecoder, RawNmeaDecoder, RawNmeaSentence},
    error::{ParserError, SerializeError},
    parser::{
        buffer::{FixedBuffer, UnderlyingBuffer},
        checksum::{ubx_checksum, UbxChecksumCalc},
        ParsedMessage, Parser, ParserBuilder, ParserIter,
    },
    ubx_packets::{RawUbxFrame, UbxMessage},
};

pub mod constants;
mod decoder;
mod error;
mod parser;
mod ubx_packets;

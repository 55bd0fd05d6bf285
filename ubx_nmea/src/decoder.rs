//! Decoding of extracted NMEA sentences.
//!
//! The [Parser](crate::Parser) only frames sentences: everything between a `$`
//! and the following `\r\n`. Turning that text into something structured is
//! the job of an [NmeaDecoder].

use core::fmt;

use thiserror::Error;

use crate::constants::{NMEA_END_CHAR_1, NMEA_END_CHAR_2, NMEA_SYNC_CHAR};

/// Converts one complete sentence into a structured value.
///
/// `raw` is the full unit cut out of the stream, starting with `$` and ending
/// with `\r\n`. Decoders may fail; the parser reports the failure as
/// [ParserError::NmeaDecode](crate::ParserError::NmeaDecode) and moves on.
pub trait NmeaDecoder {
    type Sentence;
    type Error: fmt::Display;

    fn decode(&mut self, raw: &[u8]) -> Result<Self::Sentence, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NmeaDecodeError {
    #[error("sentence contains non ASCII bytes")]
    NotAscii,
    #[error("{0}")]
    Nmea(String),
}

/// Default decoder, backed by the [nmea] crate.
///
/// Note that the [nmea] crate verifies the `*hh` checksum of the sentence, so
/// corrupted sentences surface as decode errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NmeaSentenceDecoder;

impl NmeaDecoder for NmeaSentenceDecoder {
    type Sentence = nmea::ParseResult;
    type Error = NmeaDecodeError;

    fn decode(&mut self, raw: &[u8]) -> Result<Self::Sentence, Self::Error> {
        let text = ascii_text(raw)?;
        nmea::parse_str(text).map_err(|e| NmeaDecodeError::Nmea(e.to_string()))
    }
}

/// Decoder that keeps the sentence text as is, minus the line terminator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawNmeaDecoder;

impl NmeaDecoder for RawNmeaDecoder {
    type Sentence = RawNmeaSentence;
    type Error = NmeaDecodeError;

    fn decode(&mut self, raw: &[u8]) -> Result<Self::Sentence, Self::Error> {
        let text = ascii_text(raw)?;
        Ok(RawNmeaSentence {
            text: text.to_owned(),
        })
    }
}

fn ascii_text(raw: &[u8]) -> Result<&str, NmeaDecodeError> {
    let raw = raw
        .strip_suffix(&[NMEA_END_CHAR_1, NMEA_END_CHAR_2])
        .unwrap_or(raw);
    if !raw.is_ascii() {
        return Err(NmeaDecodeError::NotAscii);
    }
    core::str::from_utf8(raw).map_err(|_| NmeaDecodeError::NotAscii)
}

/// An NMEA sentence that was framed but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawNmeaSentence {
    text: String,
}

impl RawNmeaSentence {
    /// Sentence text, `$` included, line terminator excluded
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Address field, e.g. `GPGGA` or `PUBX`
    pub fn address(&self) -> &str {
        let body = self
            .text
            .strip_prefix(char::from(NMEA_SYNC_CHAR))
            .unwrap_or(&self.text);
        let end = body.find(|c: char| c == ',' || c == '*').unwrap_or(body.len());
        &body[..end]
    }

    /// Two letter talker, `None` for proprietary (`$P...`) sentences
    pub fn talker_id(&self) -> Option<&str> {
        let address = self.address();
        if address.starts_with('P') {
            return None;
        }
        address.get(..2)
    }

    pub fn sentence_type(&self) -> &str {
        let address = self.address();
        match self.talker_id() {
            Some(talker) => &address[talker.len()..],
            None => address,
        }
    }
}

impl fmt::Display for RawNmeaSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

use core::{cmp::min, iter::FusedIterator};

use log::{debug, trace};

use crate::{
    constants::{
        NMEA_END_CHAR_1, NMEA_END_CHAR_2, NMEA_END_LEN, NMEA_SYNC_CHAR, UBX_CHECKSUM_LEN,
        UBX_CLASS_OFFSET, UBX_FRAME_OVERHEAD, UBX_HEADER_LEN, UBX_LENGTH_OFFSET, UBX_SYNC_CHAR_1,
        UBX_SYNC_CHAR_2, UBX_SYNC_SIZE,
    },
    decoder::{NmeaDecoder, NmeaSentenceDecoder},
    error::ParserError,
    ubx_packets::RawUbxFrame,
};

pub mod buffer;
pub mod checksum;

use buffer::{FixedBuffer, UnderlyingBuffer};
use checksum::UbxChecksumCalc;

/// One message extracted from the stream
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsedMessage<S> {
    /// Complete UBX frame, payload left uninterpreted
    Ubx(RawUbxFrame),
    /// Sentence as produced by the parser's [NmeaDecoder]
    Nmea(S),
}

impl<S> ParsedMessage<S> {
    pub fn is_ubx(&self) -> bool {
        matches!(self, Self::Ubx(_))
    }

    pub fn is_nmea(&self) -> bool {
        matches!(self, Self::Nmea(_))
    }

    pub fn as_ubx(&self) -> Option<&RawUbxFrame> {
        match self {
            Self::Ubx(frame) => Some(frame),
            Self::Nmea(_) => None,
        }
    }

    pub fn as_nmea(&self) -> Option<&S> {
        match self {
            Self::Ubx(_) => None,
            Self::Nmea(sentence) => Some(sentence),
        }
    }

    pub fn into_ubx(self) -> Option<RawUbxFrame> {
        match self {
            Self::Ubx(frame) => Some(frame),
            Self::Nmea(_) => None,
        }
    }

    pub fn into_nmea(self) -> Option<S> {
        match self {
            Self::Ubx(_) => None,
            Self::Nmea(sentence) => Some(sentence),
        }
    }
}

/// Outcome of a single boundary detection
#[derive(Debug)]
enum Step<S> {
    /// This many leading noise bytes were dropped
    Skipped(usize),
    /// Nothing can be extracted until more bytes are fed
    NotReady,
    Extracted(Result<ParsedMessage<S>, ParserError>),
}

/// Streaming parser for an interleaved UBX + NMEA byte stream.
///
/// Bytes are appended with [Parser::feed] and complete messages are pulled
/// with [Parser::next_message] (or the [ParserIter] returned by
/// [Parser::messages] and [Parser::consume]). Bytes in front of the next `$`
/// or `b5 62` marker are dropped silently.
///
/// The default constructor builds a parser with an unbounded `Vec` buffer and
/// the [nmea] crate based decoder. Use [ParserBuilder] to pick another
/// [NmeaDecoder], a bounded buffer, or to enable UBX checksum validation.
pub struct Parser<D = NmeaSentenceDecoder, T = Vec<u8>>
where
    D: NmeaDecoder,
    T: UnderlyingBuffer,
{
    buf: T,
    decoder: D,
    validate_checksum: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Vec::new(), NmeaSentenceDecoder)
    }
}

impl<D: NmeaDecoder, T: UnderlyingBuffer> Parser<D, T> {
    pub fn new(underlying: T, decoder: D) -> Self {
        Self {
            buf: underlying,
            decoder,
            validate_checksum: false,
        }
    }

    pub fn is_buffer_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    /// Drops every buffered byte
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn is_checksum_validated(&self) -> bool {
        self.validate_checksum
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }

    /// Appends `chunk` to the receive buffer. Nothing is parsed here.
    ///
    /// # Errors
    ///
    /// With a bounded buffer, the part of `chunk` that does not fit in the
    /// remaining space is dropped and reported as [ParserError::OutOfMemory].
    /// The buffer is then full, and the next extraction resyncs it.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), ParserError> {
        let lost = self.buf.extend_from_slice(chunk);
        if lost > 0 {
            debug!("receive buffer full, {} bytes dropped", lost);
            return Err(ParserError::OutOfMemory {
                required_size: self.buf.len() + lost,
            });
        }
        Ok(())
    }

    /// Feeds `chunk` and returns an iterator over the messages that became
    /// available.
    ///
    /// With a bounded buffer, bytes that do not fit yet are copied in as the
    /// iterator frees space, so no data is lost as long as the iterator is
    /// driven to the end.
    pub fn consume<'a>(&'a mut self, chunk: &'a [u8]) -> ParserIter<'a, D, T> {
        let fits = min(chunk.len(), self.buf.remaining_capacity());
        let (head, rest) = chunk.split_at(fits);
        self.buf.extend_from_slice(head);
        ParserIter {
            parser: self,
            pending: rest,
        }
    }

    /// Iterator over the messages currently extractable from the buffer
    pub fn messages(&mut self) -> ParserIter<'_, D, T> {
        ParserIter {
            parser: self,
            pending: &[],
        }
    }

    /// Extracts the next complete message.
    ///
    /// Returns `None` once nothing more can be extracted with the bytes
    /// buffered so far: feed more data and call again. An extracted message
    /// is removed from the buffer and never returned twice.
    pub fn next_message(&mut self) -> Option<Result<ParsedMessage<D::Sentence>, ParserError>> {
        loop {
            match self.step() {
                Step::Skipped(count) => {
                    trace!("skipped {} noise bytes", count);
                },
                Step::NotReady => return None,
                Step::Extracted(message) => return Some(message),
            }
        }
    }

    fn step(&mut self) -> Step<D::Sentence> {
        let nmea_start = self.buf.find(NMEA_SYNC_CHAR);
        let ubx_start = self.buf.find_pair(UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2);

        match (nmea_start, ubx_start) {
            (Some(0), _) => self.take_nmea(),
            (_, Some(0)) => self.take_ubx(),
            (Some(nmea), Some(ubx)) => self.skip(min(nmea, ubx)),
            (Some(pos), None) | (None, Some(pos)) => self.skip(pos),
            (None, None) => {
                if self.buf.remaining_capacity() == 0 && self.buf.len() > 1 {
                    // Full of noise: keep the last byte, it may be the start of a UBX sync
                    self.skip(self.buf.len() - 1)
                } else {
                    Step::NotReady
                }
            },
        }
    }

    fn skip(&mut self, count: usize) -> Step<D::Sentence> {
        self.buf.drain(count);
        Step::Skipped(count)
    }

    fn take_nmea(&mut self) -> Step<D::Sentence> {
        let Some(end) = self.buf.find_pair(NMEA_END_CHAR_1, NMEA_END_CHAR_2) else {
            if self.buf.remaining_capacity() == 0 {
                // The terminator can never arrive, drop the sync char and resync
                debug!("unterminated NMEA sentence fills the buffer, dropping it");
                let required_size = self.buf.len() + 1;
                self.buf.drain(1);
                return Step::Extracted(Err(ParserError::OutOfMemory { required_size }));
            }
            return Step::NotReady;
        };
        let sentence_len = end + NMEA_END_LEN;

        let raw = &self.buf[0..sentence_len];
        let result = match self.decoder.decode(raw) {
            Ok(sentence) => Ok(ParsedMessage::Nmea(sentence)),
            Err(e) => {
                debug!("NMEA decoder rejected a sentence: {}", e);
                Err(ParserError::NmeaDecode {
                    sentence: String::from_utf8_lossy(raw).into_owned(),
                    reason: e.to_string(),
                })
            },
        };
        self.buf.drain(sentence_len);
        Step::Extracted(result)
    }

    fn take_ubx(&mut self) -> Step<D::Sentence> {
        if self.buf.len() < UBX_HEADER_LEN {
            return Step::NotReady;
        }

        let pack_len: usize =
            u16::from_le_bytes([self.buf[UBX_LENGTH_OFFSET], self.buf[UBX_LENGTH_OFFSET + 1]])
                .into();
        let frame_len = pack_len + UBX_FRAME_OVERHEAD;

        if frame_len > self.buf.max_capacity() {
            // We ran out of space, drop this packet and move on
            debug!("UBX frame of {} bytes cannot fit the buffer", frame_len);
            self.buf.drain(UBX_SYNC_SIZE);
            return Step::Extracted(Err(ParserError::OutOfMemory {
                required_size: frame_len,
            }));
        }

        if self.buf.len() < frame_len {
            return Step::NotReady;
        }

        if self.validate_checksum {
            let mut checksummer = UbxChecksumCalc::new();
            checksummer.update(&self.buf[UBX_CLASS_OFFSET..frame_len - UBX_CHECKSUM_LEN]);
            let checked = checksummer
                .validate_result(self.buf[frame_len - 2], self.buf[frame_len - 1]);
            if let Err(e) = checked {
                debug!("dropping UBX frame: {}", e);
                self.buf.drain(UBX_SYNC_SIZE);
                return Step::Extracted(Err(e));
            }
        }

        let frame = RawUbxFrame::new(self.buf[0..frame_len].to_vec());
        self.buf.drain(frame_len);
        Step::Extracted(Ok(ParsedMessage::Ubx(frame)))
    }
}

/// Iterator over the messages available in a [Parser] buffer.
///
/// Ends when the buffered bytes do not hold another complete message and the
/// consumed chunk has been copied in completely.
pub struct ParserIter<'a, D: NmeaDecoder, T: UnderlyingBuffer> {
    parser: &'a mut Parser<D, T>,
    /// Tail of the consumed chunk not copied into the buffer yet
    pending: &'a [u8],
}

impl<D: NmeaDecoder, T: UnderlyingBuffer> Iterator for ParserIter<'_, D, T> {
    type Item = Result<ParsedMessage<D::Sentence>, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(message) = self.parser.next_message() {
                return Some(message);
            }
            if self.pending.is_empty() {
                return None;
            }

            let fits = min(self.pending.len(), self.parser.buf.remaining_capacity());
            if fits == 0 {
                // A full buffer always resyncs in next_message, this is a last resort
                let required_size = self.parser.buf.len() + self.pending.len();
                self.pending = &[];
                return Some(Err(ParserError::OutOfMemory { required_size }));
            }
            let (head, rest) = self.pending.split_at(fits);
            self.parser.buf.extend_from_slice(head);
            self.pending = rest;
        }
    }
}

impl<D: NmeaDecoder, T: UnderlyingBuffer> Drop for ParserIter<'_, D, T> {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            debug!("{} consumed bytes dropped with the iterator", self.pending.len());
        }
    }
}

impl<D: NmeaDecoder, T: UnderlyingBuffer> FusedIterator for ParserIter<'_, D, T> {}

/// Builds a [Parser] with a chosen decoder, buffer and checksum policy.
///
/// ```
/// use ubx_nmea::{ParserBuilder, RawNmeaDecoder};
///
/// let mut parser = ParserBuilder::new()
///     .with_decoder(RawNmeaDecoder)
///     .with_checksum_validation(true)
///     .with_fixed_buffer::<1024>();
/// assert!(parser.consume(b"$GPTXT,hello*00\r\n").next().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ParserBuilder<D = NmeaSentenceDecoder> {
    decoder: D,
    validate_checksum: bool,
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self {
            decoder: NmeaSentenceDecoder,
            validate_checksum: false,
        }
    }
}

impl<D: NmeaDecoder> ParserBuilder<D> {
    pub fn with_decoder<E: NmeaDecoder>(self, decoder: E) -> ParserBuilder<E> {
        ParserBuilder {
            decoder,
            validate_checksum: self.validate_checksum,
        }
    }

    /// When enabled, UBX frames whose checksum does not match are reported as
    /// [ParserError::InvalidChecksum] instead of being returned.
    pub fn with_checksum_validation(mut self, enabled: bool) -> Self {
        self.validate_checksum = enabled;
        self
    }

    pub fn with_vec_buffer(self) -> Parser<D, Vec<u8>> {
        self.with_buffer(Vec::new())
    }

    pub fn with_fixed_buffer<const N: usize>(self) -> Parser<D, FixedBuffer<N>> {
        self.with_buffer(FixedBuffer::<N>::new())
    }

    pub fn with_buffer<T: UnderlyingBuffer>(self, underlying: T) -> Parser<D, T> {
        let mut parser = Parser::new(underlying, self.decoder);
        parser.validate_checksum = self.validate_checksum;
        parser
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{RawNmeaDecoder, RawNmeaSentence};

    const ACK_ACK: [u8; 10] = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x04, 0x05, 0x11, 0x38];
    const GPTXT: &[u8] = b"$GPTXT,01,01,02,u-blox ag - www.u-blox.com*50\r\n";

    fn raw_parser() -> Parser<RawNmeaDecoder> {
        ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_vec_buffer()
    }

    #[test]
    fn parser_empty_buffer_is_not_ready() {
        let mut parser = raw_parser();
        assert!(parser.next_message().is_none());
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_noise_only_is_kept() {
        let mut parser = raw_parser();
        parser.feed(&[0x00, 0x01, 0x02, 0xb5]).unwrap();
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 4);
    }

    #[test]
    fn parser_skips_to_nearest_marker() {
        let mut parser = raw_parser();
        let mut bytes = vec![0x00, 0x01];
        bytes.extend_from_slice(&ACK_ACK);
        bytes.extend_from_slice(GPTXT);

        let msgs: Vec<_> = parser.consume(&bytes).collect();
        assert_eq!(msgs.len(), 2);
        assert!(matches!(&msgs[0], Ok(ParsedMessage::Ubx(frame)) if frame.as_bytes() == ACK_ACK));
        assert!(matches!(&msgs[1], Ok(ParsedMessage::Nmea(s)) if s.sentence_type() == "TXT"));
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_nmea_takes_priority_at_offset_zero() {
        let mut parser = raw_parser();
        parser.feed(b"$GP").unwrap();
        parser.feed(&ACK_ACK).unwrap();
        // No CRLF yet: the sentence at the front blocks everything behind it
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 3 + ACK_ACK.len());

        // The UBX frame ends up inside the sentence, which the decoder refuses
        parser.feed(b"\r\n").unwrap();
        match parser.next_message() {
            Some(Err(ParserError::NmeaDecode { sentence, .. })) => {
                assert!(sentence.starts_with("$GP"));
            },
            other => panic!("unexpected {:?}", other),
        }
        assert!(parser.is_buffer_empty());
        assert!(parser.messages().next().is_none());
    }

    #[test]
    fn parser_ubx_header_incomplete() {
        let mut parser = raw_parser();
        parser.feed(&ACK_ACK[..5]).unwrap();
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 5);
    }

    #[test]
    fn parser_lone_sync_char_is_noise_until_completed() {
        let mut parser = raw_parser();
        parser.feed(&[0xb5]).unwrap();
        assert!(parser.next_message().is_none());
        parser.feed(&ACK_ACK[1..]).unwrap();
        assert!(matches!(parser.next_message(), Some(Ok(ParsedMessage::Ubx(_)))));
        assert!(parser.next_message().is_none());
    }

    #[test]
    fn parser_does_not_validate_checksum_by_default() {
        let mut parser = raw_parser();
        let mut bad = ACK_ACK;
        bad[9] = 0x00;
        parser.feed(&bad).unwrap();
        match parser.next_message() {
            Some(Ok(ParsedMessage::Ubx(frame))) => assert!(!frame.is_checksum_valid()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parser_checksum_validation_drops_sync_and_resyncs() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_checksum_validation(true)
            .with_vec_buffer();
        assert!(parser.is_checksum_validated());

        let mut bytes = ACK_ACK.to_vec();
        bytes[9] = 0x00;
        bytes.extend_from_slice(&ACK_ACK);
        let msgs: Vec<_> = parser.consume(&bytes).collect();
        assert_eq!(
            msgs,
            vec![
                Err(ParserError::InvalidChecksum {
                    expect: 0x0011,
                    got: 0x3811
                }),
                Ok(ParsedMessage::Ubx(RawUbxFrame::new(ACK_ACK.to_vec()))),
            ]
        );
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_decode_error_consumes_sentence() {
        let mut parser = raw_parser();
        let mut bytes = b"$GP\xff\r\n".to_vec();
        bytes.extend_from_slice(GPTXT);
        let msgs: Vec<_> = parser.consume(&bytes).collect();
        assert_eq!(msgs.len(), 2);
        assert!(matches!(
            &msgs[0],
            Err(ParserError::NmeaDecode { reason, .. }) if reason == "sentence contains non ASCII bytes"
        ));
        assert!(msgs[1].is_ok());
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_idempotent_after_extraction() {
        let mut parser = raw_parser();
        parser.feed(GPTXT).unwrap();
        assert!(parser.next_message().is_some());
        for _ in 0..3 {
            assert!(parser.next_message().is_none());
        }
    }

    #[test]
    fn parser_fixed_buffer_feed_keeps_what_fits() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<8>();
        parser.feed(&[0x00; 6]).unwrap();
        assert_eq!(
            parser.feed(&[0x00; 3]),
            Err(ParserError::OutOfMemory { required_size: 9 })
        );
        assert_eq!(parser.buffer_len(), 8);
        // Full of noise, only the last byte survives
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 1);
    }

    #[test]
    fn parser_fixed_buffer_consume_larger_than_free_space() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<12>();
        parser.feed(&ACK_ACK).unwrap();
        let mut it = parser.consume(&ACK_ACK);
        assert!(matches!(it.next(), Some(Ok(ParsedMessage::Ubx(_)))));
        assert!(matches!(it.next(), Some(Ok(ParsedMessage::Ubx(_)))));
        assert!(it.next().is_none());
        drop(it);
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_fixed_buffer_resumes_after_unterminated_sentence() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<16>();
        let mut data = b"$GPGGA,123".to_vec();
        for _ in 0..20 {
            data.extend_from_slice(b"$GPTXT,1*00\r\n");
        }

        let mut sentences = Vec::new();
        let mut errors = Vec::new();
        for chunk in data.chunks(10) {
            for msg in parser.consume(chunk) {
                match msg {
                    Ok(ParsedMessage::Nmea(s)) => sentences.push(s.to_string()),
                    Ok(ParsedMessage::Ubx(_)) => panic!("no UBX in this stream"),
                    Err(e) => errors.push(e),
                }
            }
        }
        assert_eq!(errors, [ParserError::OutOfMemory { required_size: 17 }]);
        assert_eq!(sentences.len(), 20);
        assert!(sentences.iter().all(|s| s == "$GPTXT,1*00"));
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_smallest_fixed_buffer_drops_bogus_header() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<8>();
        assert!(parser.consume(&[0xb5, 0x62, 0x05, 0x01]).next().is_none());

        let mut data = Vec::new();
        for _ in 0..10 {
            data.extend_from_slice(b"$A\r\n");
        }
        let mut sentences = 0;
        let mut errors = Vec::new();
        for chunk in data.chunks(4) {
            for msg in parser.consume(chunk) {
                match msg {
                    Ok(_) => sentences += 1,
                    Err(e) => errors.push(e),
                }
            }
        }
        // Length field read from "$A" announces 0x4124 payload bytes
        assert_eq!(
            errors,
            [ParserError::OutOfMemory {
                required_size: 0x4124 + 8
            }]
        );
        assert_eq!(sentences, 10);
    }

    #[test]
    fn parser_fixed_buffer_drops_frame_too_large() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<16>();
        // Declared payload of 0x20 bytes can never fit 16 bytes
        let mut bytes = vec![0xb5, 0x62, 0x06, 0x01, 0x20, 0x00];
        bytes.extend_from_slice(&ACK_ACK);
        let msgs: Vec<_> = parser.consume(&bytes).collect();
        assert_eq!(msgs.len(), 2);
        assert_eq!(
            msgs[0],
            Err(ParserError::OutOfMemory {
                required_size: 0x20 + 8
            })
        );
        assert!(matches!(&msgs[1], Ok(ParsedMessage::Ubx(frame)) if frame.as_bytes() == ACK_ACK));
    }

    #[test]
    fn parser_fixed_buffer_unterminated_sentence() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<8>();
        parser.feed(b"$GPGGA,1").unwrap();
        assert_eq!(
            parser.next_message(),
            Some(Err(ParserError::OutOfMemory { required_size: 9 }))
        );
        // The rest has no marker and is dropped as noise once space is needed again
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 7);
    }

    #[test]
    fn parser_fixed_buffer_full_of_noise_keeps_last_byte() {
        let mut parser = ParserBuilder::new()
            .with_decoder(RawNmeaDecoder)
            .with_fixed_buffer::<8>();
        parser
            .feed(&[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xb5])
            .unwrap();
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 1);
        parser.feed(&[0x62, 0x0a, 0x04]).unwrap();
        assert!(parser.next_message().is_none());
        assert_eq!(parser.buffer_len(), 4);
    }

    #[test]
    fn parser_clear() {
        let mut parser = raw_parser();
        parser.feed(b"noise without any marker").unwrap();
        assert!(!parser.is_buffer_empty());
        parser.clear();
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parsed_message_accessors() {
        let ubx: ParsedMessage<RawNmeaSentence> =
            ParsedMessage::Ubx(RawUbxFrame::new(ACK_ACK.to_vec()));
        assert!(ubx.is_ubx());
        assert!(!ubx.is_nmea());
        assert!(ubx.as_nmea().is_none());
        assert_eq!(ubx.as_ubx().map(RawUbxFrame::class), Some(0x05));
        assert!(ubx.into_ubx().is_some());

        let nmea: ParsedMessage<u32> = ParsedMessage::Nmea(7);
        assert!(nmea.is_nmea());
        assert_eq!(nmea.as_nmea(), Some(&7));
        assert_eq!(nmea.clone().into_ubx(), None);
        assert_eq!(nmea.into_nmea(), Some(7));
    }
}

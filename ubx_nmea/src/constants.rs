pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;
pub(crate) const UBX_SYNC_SIZE: usize = 2;
pub(crate) const UBX_MSG_ID_LEN: usize = 2; // class (1) + id (1)
pub(crate) const UBX_PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const UBX_HEADER_LEN: usize = UBX_SYNC_SIZE + UBX_MSG_ID_LEN + UBX_PAYLOAD_SIZE_LEN;
pub(crate) const UBX_CHECKSUM_LEN: usize = 2;
/// Bytes of a frame that are not payload: header (6) + checksum (2)
pub(crate) const UBX_FRAME_OVERHEAD: usize = UBX_HEADER_LEN + UBX_CHECKSUM_LEN;

pub(crate) const UBX_CLASS_OFFSET: usize = 2; // After SYNC_CHAR_1, SYNC_CHAR_2
pub(crate) const UBX_MSG_ID_OFFSET: usize = 3; // After CLASS
pub(crate) const UBX_LENGTH_OFFSET: usize = 4; // After MSG_ID

/// Largest payload the 16 bit length field can describe
pub const UBX_MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Fixed suffix appended after the checksum of every outbound frame.
/// The receiver firmware we talk to expects it; it is not part of the
/// checksummed region and the inbound framing does not account for it.
pub const UBX_OUTBOUND_TRAILER: [u8; 2] = [0x10, 0x13];

pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub const NMEA_END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const NMEA_END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)
pub(crate) const NMEA_END_LEN: usize = 2;

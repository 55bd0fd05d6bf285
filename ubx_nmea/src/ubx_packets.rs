use crate::{
    constants::{
        UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_FRAME_OVERHEAD, UBX_HEADER_LEN,
        UBX_LENGTH_OFFSET, UBX_MAX_PAYLOAD_LEN, UBX_MSG_ID_OFFSET, UBX_OUTBOUND_TRAILER,
        UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
    },
    parser::checksum::ubx_checksum,
    SerializeError,
};

/// Outbound UBX command.
///
/// `msg_id` holds the class and id bytes, in wire order. The payload length is
/// checked on construction, so a `UbxMessage` always serializes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UbxMessage {
    msg_id: [u8; 2],
    payload: Vec<u8>,
}

impl UbxMessage {
    pub fn new(msg_id: [u8; 2], payload: impl Into<Vec<u8>>) -> Result<Self, SerializeError> {
        let payload = payload.into();
        if payload.len() > UBX_MAX_PAYLOAD_LEN {
            return Err(SerializeError::PayloadTooLarge { len: payload.len() });
        }
        Ok(Self { msg_id, payload })
    }

    pub fn from_class_id(
        class: u8,
        id: u8,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Self, SerializeError> {
        Self::new([class, id], payload)
    }

    pub fn msg_id(&self) -> [u8; 2] {
        self.msg_id
    }

    pub fn class(&self) -> u8 {
        self.msg_id[0]
    }

    pub fn id(&self) -> u8 {
        self.msg_id[1]
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Number of bytes [UbxMessage::serialize] produces, trailer included
    pub fn serialized_len(&self) -> usize {
        UBX_FRAME_OVERHEAD + self.payload.len() + UBX_OUTBOUND_TRAILER.len()
    }

    /// Wire representation:
    /// `b5 62 | class id | len (u16 LE) | payload | ck_a ck_b | 10 13`
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        self.serialize_into(&mut out);
        out
    }

    /// Appends the wire representation to `out`
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        let start = out.len();
        out.extend_from_slice(&[UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2]);
        out.extend_from_slice(&self.msg_id);
        // cannot fail, checked in `new`
        let len = self.payload.len() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&self.payload);
        let checksum = ubx_checksum(&out[start + UBX_CLASS_OFFSET..]);
        out.extend_from_slice(&checksum);
        out.extend_from_slice(&UBX_OUTBOUND_TRAILER);
    }
}

/// One inbound UBX frame, exactly as it was cut out of the stream:
/// sync chars, class, id, length, payload and checksum.
///
/// The payload is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawUbxFrame {
    bytes: Vec<u8>,
}

impl RawUbxFrame {
    /// `bytes` must hold a complete frame, as framed by the parser.
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.len() >= UBX_FRAME_OVERHEAD);
        Self { bytes }
    }

    pub fn class(&self) -> u8 {
        self.bytes[UBX_CLASS_OFFSET]
    }

    pub fn msg_id(&self) -> u8 {
        self.bytes[UBX_MSG_ID_OFFSET]
    }

    /// Value of the length field
    pub fn payload_len(&self) -> u16 {
        u16::from_le_bytes([
            self.bytes[UBX_LENGTH_OFFSET],
            self.bytes[UBX_LENGTH_OFFSET + 1],
        ])
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[UBX_HEADER_LEN..self.bytes.len() - UBX_CHECKSUM_LEN]
    }

    /// Checksum carried by the frame, `[ck_a, ck_b]`
    pub fn checksum(&self) -> [u8; 2] {
        let n = self.bytes.len();
        [self.bytes[n - 2], self.bytes[n - 1]]
    }

    /// Checksum computed over class, id, length and payload
    pub fn computed_checksum(&self) -> [u8; 2] {
        ubx_checksum(&self.bytes[UBX_CLASS_OFFSET..self.bytes.len() - UBX_CHECKSUM_LEN])
    }

    pub fn is_checksum_valid(&self) -> bool {
        self.checksum() == self.computed_checksum()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for RawUbxFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

//! Transfer transaction body.
//!
//! Moves mosaics to a recipient, optionally carrying an opaque message.
//! The two variable-length collections demonstrate both prefix styles:
//! the message carries an explicit u16 byte size, the mosaic list an
//! explicit u8 element count. Both prefixes are recomputed from the
//! collections on every serialization -- they are never stored.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::config::{MAX_MESSAGE_SIZE, MAX_MOSAICS_PER_TRANSFER};
use crate::model::{Mosaic, UnresolvedAddress};

/// Body of a transfer transaction.
///
/// Wire layout: recipient (24), message size (u16), mosaic count (u8),
/// reserved (u8), reserved (u32), mosaics (16 each), message bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBody {
    /// Recipient, possibly a namespace alias.
    pub recipient_address: UnresolvedAddress,
    /// Attached mosaics. May be empty for message-only transfers.
    pub mosaics: Vec<Mosaic>,
    /// Opaque message bytes. The protocol assigns no meaning to them.
    pub message: Vec<u8>,
}

impl TransferBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    const FIXED_SIZE: usize = UnresolvedAddress::WIRE_SIZE + 2 + 1 + 1 + 4;

    /// Builds a transfer body, checking that both collections fit their
    /// wire prefixes.
    pub fn new(
        recipient_address: UnresolvedAddress,
        mosaics: Vec<Mosaic>,
        message: Vec<u8>,
    ) -> CodecResult<Self> {
        if message.len() > MAX_MESSAGE_SIZE {
            return Err(CodecError::InvalidArgument {
                entity: "TransferBody",
                field: "message",
                reason: format!(
                    "{} bytes exceeds the u16 size prefix maximum of {}",
                    message.len(),
                    MAX_MESSAGE_SIZE
                ),
            });
        }
        if mosaics.len() > MAX_MOSAICS_PER_TRANSFER {
            return Err(CodecError::InvalidArgument {
                entity: "TransferBody",
                field: "mosaics",
                reason: format!(
                    "{} attachments exceeds the u8 count prefix maximum of {}",
                    mosaics.len(),
                    MAX_MOSAICS_PER_TRANSFER
                ),
            });
        }
        Ok(Self {
            recipient_address,
            mosaics,
            message,
        })
    }
}

impl WireSerialize for TransferBody {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + self.mosaics.len() * Mosaic::WIRE_SIZE + self.message.len()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.recipient_address.write_to(writer);
        writer.write_u16(self.message.len() as u16);
        writer.write_u8(self.mosaics.len() as u8);
        writer.write_zeros(1); // reserved
        writer.write_zeros(4); // reserved
        for mosaic in &self.mosaics {
            mosaic.write_to(writer);
        }
        writer.write_bytes(&self.message);
    }
}

impl WireDeserialize for TransferBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let recipient_address = UnresolvedAddress::read_from(reader)?;
        let message_size = reader.read_u16("TransferBody")? as usize;
        let mosaics_count = reader.read_u8("TransferBody")? as usize;
        reader.skip(1, "TransferBody")?; // reserved
        reader.skip(4, "TransferBody")?; // reserved
        let mut mosaics = Vec::with_capacity(mosaics_count);
        for _ in 0..mosaics_count {
            mosaics.push(Mosaic::read_from(reader)?);
        }
        let message = reader.read_vec(message_size, "TransferBody")?;
        Ok(Self {
            recipient_address,
            mosaics,
            message,
        })
    }
}

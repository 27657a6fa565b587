//! Account metadata transaction body.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::config::MAX_METADATA_VALUE_SIZE;
use crate::model::{MetadataKey, UnresolvedAddress};

/// Body of an account metadata transaction.
///
/// Wire layout: target address (24), scoped key (u64), value size delta
/// (i16), value size (u16), value bytes. The delta is how much the stored
/// value's length changes, which can be negative when shrinking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadataBody {
    /// Account the metadata is attached to.
    pub target_address: UnresolvedAddress,
    /// Key chosen by the metadata author, scoped to (author, target).
    pub scoped_metadata_key: MetadataKey,
    /// Signed change in the stored value's length.
    pub value_size_delta: i16,
    /// The value bytes written by this transaction.
    pub value: Vec<u8>,
}

impl AccountMetadataBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    const FIXED_SIZE: usize = UnresolvedAddress::WIRE_SIZE + MetadataKey::WIRE_SIZE + 2 + 2;

    /// Builds a metadata body, checking the value fits its u16 size prefix.
    pub fn new(
        target_address: UnresolvedAddress,
        scoped_metadata_key: MetadataKey,
        value_size_delta: i16,
        value: Vec<u8>,
    ) -> CodecResult<Self> {
        if value.len() > MAX_METADATA_VALUE_SIZE {
            return Err(CodecError::InvalidArgument {
                entity: "AccountMetadataBody",
                field: "value",
                reason: format!(
                    "{} bytes exceeds the u16 size prefix maximum of {}",
                    value.len(),
                    MAX_METADATA_VALUE_SIZE
                ),
            });
        }
        Ok(Self {
            target_address,
            scoped_metadata_key,
            value_size_delta,
            value,
        })
    }
}

impl WireSerialize for AccountMetadataBody {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + self.value.len()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.target_address.write_to(writer);
        self.scoped_metadata_key.write_to(writer);
        writer.write_i16(self.value_size_delta);
        writer.write_u16(self.value.len() as u16);
        writer.write_bytes(&self.value);
    }
}

impl WireDeserialize for AccountMetadataBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let target_address = UnresolvedAddress::read_from(reader)?;
        let scoped_metadata_key = MetadataKey::read_from(reader)?;
        let value_size_delta = reader.read_i16("AccountMetadataBody")?;
        let value_size = reader.read_u16("AccountMetadataBody")? as usize;
        let value = reader.read_vec(value_size, "AccountMetadataBody")?;
        Ok(Self {
            target_address,
            scoped_metadata_key,
            value_size_delta,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let body = AccountMetadataBody::new(
            UnresolvedAddress([0x21; 24]),
            MetadataKey(0xDEAD_BEEF),
            11,
            b"hello world".to_vec(),
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 36 + 11);
        assert_eq!(AccountMetadataBody::from_wire_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn negative_delta_survives() {
        let body = AccountMetadataBody::new(
            UnresolvedAddress([0; 24]),
            MetadataKey(1),
            -5,
            vec![],
        )
        .unwrap();
        let decoded = AccountMetadataBody::from_wire_bytes(&body.to_wire_bytes()).unwrap();
        assert_eq!(decoded.value_size_delta, -5);
    }

    #[test]
    fn value_size_prefix_matches_value() {
        let body = AccountMetadataBody::new(
            UnresolvedAddress([0; 24]),
            MetadataKey(1),
            3,
            vec![1, 2, 3],
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        // value size sits after address (24) + key (8) + delta (2).
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 3);
    }

    #[test]
    fn oversized_value_rejected() {
        let err = AccountMetadataBody::new(
            UnresolvedAddress([0; 24]),
            MetadataKey(1),
            0,
            vec![0u8; MAX_METADATA_VALUE_SIZE + 1],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidArgument { field: "value", .. }
        ));
    }
}

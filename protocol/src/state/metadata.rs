//! Metadata state entry.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::config::MAX_METADATA_VALUE_SIZE;
use crate::model::{Address, MetadataKey, MetadataType};

use super::StateHeader;

/// A metadata key-value attachment as stored in chain state.
///
/// Wire layout: version (u16), source address (25), target address (25),
/// scoped key (u64), target id (u64), metadata type (u8), value size
/// (u16), value bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Common state entry prefix, written first.
    pub header: StateHeader,
    /// Who wrote the metadata.
    pub source_address: Address,
    /// Whose object it is attached to.
    pub target_address: Address,
    /// Key chosen by the source, scoped to (source, target, target id).
    pub scoped_metadata_key: MetadataKey,
    /// Mosaic or namespace id for non-account metadata; zero otherwise.
    pub target_id: u64,
    /// What kind of object the metadata is attached to.
    pub metadata_type: MetadataType,
    /// The stored value bytes.
    pub value: Vec<u8>,
}

impl MetadataEntry {
    const FIXED_SIZE: usize = StateHeader::WIRE_SIZE
        + 2 * Address::WIRE_SIZE
        + MetadataKey::WIRE_SIZE
        + 8
        + MetadataType::WIRE_SIZE
        + 2;

    /// Builds an entry at the current layout version, checking the value
    /// fits its u16 size prefix.
    pub fn new(
        source_address: Address,
        target_address: Address,
        scoped_metadata_key: MetadataKey,
        target_id: u64,
        metadata_type: MetadataType,
        value: Vec<u8>,
    ) -> CodecResult<Self> {
        if value.len() > MAX_METADATA_VALUE_SIZE {
            return Err(CodecError::InvalidArgument {
                entity: "MetadataEntry",
                field: "value",
                reason: format!(
                    "{} bytes exceeds the u16 size prefix maximum of {}",
                    value.len(),
                    MAX_METADATA_VALUE_SIZE
                ),
            });
        }
        Ok(Self {
            header: StateHeader::current(),
            source_address,
            target_address,
            scoped_metadata_key,
            target_id,
            metadata_type,
            value,
        })
    }
}

impl WireSerialize for MetadataEntry {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + self.value.len()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.header.write_to(writer);
        self.source_address.write_to(writer);
        self.target_address.write_to(writer);
        self.scoped_metadata_key.write_to(writer);
        writer.write_u64(self.target_id);
        self.metadata_type.write_to(writer);
        writer.write_u16(self.value.len() as u16);
        writer.write_bytes(&self.value);
    }
}

impl WireDeserialize for MetadataEntry {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let header = StateHeader::read_from(reader)?;
        let source_address = Address::read_from(reader)?;
        let target_address = Address::read_from(reader)?;
        let scoped_metadata_key = MetadataKey::read_from(reader)?;
        let target_id = reader.read_u64("MetadataEntry")?;
        let metadata_type = MetadataType::read_from(reader)?;
        let value_size = reader.read_u16("MetadataEntry")? as usize;
        let value = reader.read_vec(value_size, "MetadataEntry")?;
        Ok(Self {
            header,
            source_address,
            target_address,
            scoped_metadata_key,
            target_id,
            metadata_type,
            value,
        })
    }
}

//! Mosaic definition and supply change bodies.

use serde::{Deserialize, Serialize};

use crate::codec::{BinaryReader, BinaryWriter, CodecResult, WireDeserialize, WireSerialize};
use crate::model::{Amount, BlockDuration, MosaicFlags, MosaicId, MosaicNonce, MosaicSupplyChangeAction};

/// Body of a mosaic definition transaction.
///
/// Wire layout: id (u64), duration (u64), nonce (u32), flags (u8),
/// divisibility (u8). All fixed width -- 22 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicDefinitionBody {
    /// The id the new mosaic will have, derived off-chain from the owner
    /// and the nonce.
    pub id: MosaicId,
    /// Lifetime in blocks; zero means the mosaic never expires.
    pub duration: BlockDuration,
    /// Nonce that went into the id derivation.
    pub nonce: MosaicNonce,
    /// Property flags, combined by bitwise OR.
    pub flags: MosaicFlags,
    /// Number of decimal places the mosaic supports.
    pub divisibility: u8,
}

impl MosaicDefinitionBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize =
        MosaicId::WIRE_SIZE + BlockDuration::WIRE_SIZE + MosaicNonce::WIRE_SIZE + MosaicFlags::WIRE_SIZE + 1;
}

impl WireSerialize for MosaicDefinitionBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.id.write_to(writer);
        self.duration.write_to(writer);
        self.nonce.write_to(writer);
        self.flags.write_to(writer);
        writer.write_u8(self.divisibility);
    }
}

impl WireDeserialize for MosaicDefinitionBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let id = MosaicId::read_from(reader)?;
        let duration = BlockDuration::read_from(reader)?;
        let nonce = MosaicNonce::read_from(reader)?;
        let flags = MosaicFlags::read_from(reader)?;
        let divisibility = reader.read_u8("MosaicDefinitionBody")?;
        Ok(Self {
            id,
            duration,
            nonce,
            flags,
            divisibility,
        })
    }
}

/// Body of a mosaic supply change transaction.
///
/// Wire layout: mosaic id (u64), delta (u64), action (u8) -- 17 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicSupplyChangeBody {
    /// The mosaic whose supply changes.
    pub mosaic_id: MosaicId,
    /// Magnitude of the change, in the mosaic's smallest unit.
    pub delta: Amount,
    /// Whether the supply grows or shrinks.
    pub action: MosaicSupplyChangeAction,
}

impl MosaicSupplyChangeBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize =
        MosaicId::WIRE_SIZE + Amount::WIRE_SIZE + MosaicSupplyChangeAction::WIRE_SIZE;
}

impl WireSerialize for MosaicSupplyChangeBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.mosaic_id.write_to(writer);
        self.delta.write_to(writer);
        self.action.write_to(writer);
    }
}

impl WireDeserialize for MosaicSupplyChangeBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let mosaic_id = MosaicId::read_from(reader)?;
        let delta = Amount::read_from(reader)?;
        let action = MosaicSupplyChangeAction::read_from(reader)?;
        Ok(Self {
            mosaic_id,
            delta,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_roundtrip() {
        let body = MosaicDefinitionBody {
            id: MosaicId(0x0DC6_7FBE_1CAD_29E3),
            duration: BlockDuration(0),
            nonce: MosaicNonce(0xB76F_E378),
            flags: MosaicFlags::SUPPLY_MUTABLE | MosaicFlags::TRANSFERABLE,
            divisibility: 6,
        };
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 22);
        assert_eq!(MosaicDefinitionBody::from_wire_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn definition_flags_byte_position() {
        let body = MosaicDefinitionBody {
            id: MosaicId(0),
            duration: BlockDuration(0),
            nonce: MosaicNonce(0),
            flags: MosaicFlags::RESTRICTABLE,
            divisibility: 2,
        };
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes[20], 0x04);
        assert_eq!(bytes[21], 2);
    }

    #[test]
    fn supply_change_roundtrip() {
        let body = MosaicSupplyChangeBody {
            mosaic_id: MosaicId(42),
            delta: Amount(1_000_000),
            action: MosaicSupplyChangeAction::INCREASE,
        };
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 17);
        assert_eq!(MosaicSupplyChangeBody::from_wire_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn unknown_action_value_tolerated() {
        let mut bytes = MosaicSupplyChangeBody {
            mosaic_id: MosaicId(1),
            delta: Amount(1),
            action: MosaicSupplyChangeAction::DECREASE,
        }
        .to_wire_bytes();
        bytes[16] = 0x7F; // no such action, but the enum is open
        let decoded = MosaicSupplyChangeBody::from_wire_bytes(&bytes).unwrap();
        assert_eq!(decoded.action, MosaicSupplyChangeAction(0x7F));
        assert_eq!(decoded.to_wire_bytes(), bytes);
    }
}

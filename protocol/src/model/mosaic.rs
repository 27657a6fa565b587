//! A mosaic reference: an id paired with an amount.
//!
//! This 16-byte composite shows up anywhere a quantity of a specific
//! mosaic changes hands -- transfer attachments, lock deposits, receipts.

use serde::{Deserialize, Serialize};

use crate::codec::{BinaryReader, BinaryWriter, CodecResult, WireDeserialize, WireSerialize};
use crate::model::primitives::{Amount, MosaicId};

/// A quantity of a specific mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mosaic {
    /// Which mosaic.
    pub mosaic_id: MosaicId,
    /// How much of it, in the smallest unit.
    pub amount: Amount,
}

impl Mosaic {
    /// Declared byte width on the wire: id plus amount.
    pub const WIRE_SIZE: usize = MosaicId::WIRE_SIZE + Amount::WIRE_SIZE;

    /// Pairs an id with an amount.
    pub fn new(mosaic_id: MosaicId, amount: Amount) -> Self {
        Self { mosaic_id, amount }
    }
}

impl WireSerialize for Mosaic {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.mosaic_id.write_to(writer);
        self.amount.write_to(writer);
    }
}

impl WireDeserialize for Mosaic {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let mosaic_id = MosaicId::read_from(reader)?;
        let amount = Amount::read_from(reader)?;
        Ok(Self { mosaic_id, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let mosaic = Mosaic::new(MosaicId(0x1234_5678_9ABC_DEF0), Amount(1_000_000));
        let bytes = mosaic.to_wire_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(Mosaic::from_wire_bytes(&bytes).unwrap(), mosaic);
    }

    #[test]
    fn id_comes_before_amount() {
        let mosaic = Mosaic::new(MosaicId(1), Amount(2));
        let bytes = mosaic.to_wire_bytes();
        assert_eq!(&bytes[..8], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[8..], &[2, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn truncated_amount_fails() {
        let mosaic = Mosaic::new(MosaicId(1), Amount(2));
        let bytes = mosaic.to_wire_bytes();
        assert!(Mosaic::from_wire_bytes(&bytes[..12]).is_err());
    }
}

//! Receipt records.
//!
//! Receipts are the chain's answer to "what actually happened": balance
//! movements the observer could not infer from the transactions alone
//! (harvest rewards, expiry refunds, inflation). Every receipt starts
//! with the same header -- a version and a type tag -- followed by a
//! type-specific body. The header is an explicit first field, and each
//! receipt's size/serialize includes the header's contribution before its
//! own.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::model::{Address, Mosaic, ReceiptType};

/// The common prefix of every receipt: version (u16) and type (u16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptHeader {
    /// Receipt layout version.
    pub version: u16,
    /// What kind of receipt follows.
    pub receipt_type: ReceiptType,
}

impl ReceiptHeader {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = 2 + ReceiptType::WIRE_SIZE;
}

impl WireSerialize for ReceiptHeader {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u16(self.version);
        self.receipt_type.write_to(writer);
    }
}

impl WireDeserialize for ReceiptHeader {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let version = reader.read_u16("ReceiptHeader")?;
        let receipt_type = ReceiptType::read_from(reader)?;
        Ok(Self {
            version,
            receipt_type,
        })
    }
}

/// Reads and cross-checks the u32 size prefix every receipt starts with.
fn check_declared_size(
    declared: usize,
    computed: usize,
    entity: &'static str,
) -> CodecResult<()> {
    if declared != computed {
        return Err(CodecError::StructuralInconsistency {
            entity,
            field: "size",
            declared: declared as u64,
            computed: computed as u64,
        });
    }
    Ok(())
}

/// Mosaics moved from one account to another outside a transfer
/// transaction (fees, rentals).
///
/// Wire layout: size (u32), header, mosaic (16), sender (25),
/// recipient (25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTransferReceipt {
    /// Common receipt prefix, written first.
    pub header: ReceiptHeader,
    /// What moved.
    pub mosaic: Mosaic,
    /// Who paid.
    pub sender_address: Address,
    /// Who received.
    pub recipient_address: Address,
}

impl BalanceTransferReceipt {
    /// Builds a receipt with the standard header for this type.
    pub fn new(mosaic: Mosaic, sender_address: Address, recipient_address: Address) -> Self {
        Self {
            header: ReceiptHeader {
                version: 1,
                receipt_type: ReceiptType::BALANCE_TRANSFER,
            },
            mosaic,
            sender_address,
            recipient_address,
        }
    }
}

impl WireSerialize for BalanceTransferReceipt {
    fn wire_size(&self) -> usize {
        4 + ReceiptHeader::WIRE_SIZE + Mosaic::WIRE_SIZE + 2 * Address::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u32(self.wire_size() as u32);
        self.header.write_to(writer);
        self.mosaic.write_to(writer);
        self.sender_address.write_to(writer);
        self.recipient_address.write_to(writer);
    }
}

impl WireDeserialize for BalanceTransferReceipt {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let declared = reader.read_u32("BalanceTransferReceipt")? as usize;
        let header = ReceiptHeader::read_from(reader)?;
        let mosaic = Mosaic::read_from(reader)?;
        let sender_address = Address::read_from(reader)?;
        let recipient_address = Address::read_from(reader)?;
        let receipt = Self {
            header,
            mosaic,
            sender_address,
            recipient_address,
        };
        check_declared_size(declared, receipt.wire_size(), "BalanceTransferReceipt")?;
        Ok(receipt)
    }
}

/// Mosaics credited to or debited from a single account (harvest fees,
/// lock deposits and refunds).
///
/// Wire layout: size (u32), header, mosaic (16), target (25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChangeReceipt {
    /// Common receipt prefix, written first.
    pub header: ReceiptHeader,
    /// What changed.
    pub mosaic: Mosaic,
    /// Whose balance.
    pub target_address: Address,
}

impl BalanceChangeReceipt {
    /// Builds a receipt with the standard header for this type.
    pub fn new(mosaic: Mosaic, target_address: Address) -> Self {
        Self {
            header: ReceiptHeader {
                version: 1,
                receipt_type: ReceiptType::BALANCE_CHANGE,
            },
            mosaic,
            target_address,
        }
    }
}

impl WireSerialize for BalanceChangeReceipt {
    fn wire_size(&self) -> usize {
        4 + ReceiptHeader::WIRE_SIZE + Mosaic::WIRE_SIZE + Address::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u32(self.wire_size() as u32);
        self.header.write_to(writer);
        self.mosaic.write_to(writer);
        self.target_address.write_to(writer);
    }
}

impl WireDeserialize for BalanceChangeReceipt {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let declared = reader.read_u32("BalanceChangeReceipt")? as usize;
        let header = ReceiptHeader::read_from(reader)?;
        let mosaic = Mosaic::read_from(reader)?;
        let target_address = Address::read_from(reader)?;
        let receipt = Self {
            header,
            mosaic,
            target_address,
        };
        check_declared_size(declared, receipt.wire_size(), "BalanceChangeReceipt")?;
        Ok(receipt)
    }
}

/// An artifact (mosaic or namespace) reached the end of its lifetime.
///
/// Wire layout: size (u32), header, artifact id (u64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactExpiryReceipt {
    /// Common receipt prefix, written first.
    pub header: ReceiptHeader,
    /// Id of the expired artifact.
    pub artifact_id: u64,
}

impl ArtifactExpiryReceipt {
    /// Builds a receipt with the standard header for this type.
    pub fn new(artifact_id: u64) -> Self {
        Self {
            header: ReceiptHeader {
                version: 1,
                receipt_type: ReceiptType::ARTIFACT_EXPIRY,
            },
            artifact_id,
        }
    }
}

impl WireSerialize for ArtifactExpiryReceipt {
    fn wire_size(&self) -> usize {
        4 + ReceiptHeader::WIRE_SIZE + 8
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u32(self.wire_size() as u32);
        self.header.write_to(writer);
        writer.write_u64(self.artifact_id);
    }
}

impl WireDeserialize for ArtifactExpiryReceipt {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let declared = reader.read_u32("ArtifactExpiryReceipt")? as usize;
        let header = ReceiptHeader::read_from(reader)?;
        let artifact_id = reader.read_u64("ArtifactExpiryReceipt")?;
        let receipt = Self {
            header,
            artifact_id,
        };
        check_declared_size(declared, receipt.wire_size(), "ArtifactExpiryReceipt")?;
        Ok(receipt)
    }
}

/// New currency minted by the protocol itself.
///
/// Wire layout: size (u32), header, mosaic (16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationReceipt {
    /// Common receipt prefix, written first.
    pub header: ReceiptHeader,
    /// What was minted.
    pub mosaic: Mosaic,
}

impl InflationReceipt {
    /// Builds a receipt with the standard header for this type.
    pub fn new(mosaic: Mosaic) -> Self {
        Self {
            header: ReceiptHeader {
                version: 1,
                receipt_type: ReceiptType::INFLATION,
            },
            mosaic,
        }
    }
}

impl WireSerialize for InflationReceipt {
    fn wire_size(&self) -> usize {
        4 + ReceiptHeader::WIRE_SIZE + Mosaic::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u32(self.wire_size() as u32);
        self.header.write_to(writer);
        self.mosaic.write_to(writer);
    }
}

impl WireDeserialize for InflationReceipt {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let declared = reader.read_u32("InflationReceipt")? as usize;
        let header = ReceiptHeader::read_from(reader)?;
        let mosaic = Mosaic::read_from(reader)?;
        let receipt = Self { header, mosaic };
        check_declared_size(declared, receipt.wire_size(), "InflationReceipt")?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, MosaicId};

    #[test]
    fn balance_transfer_roundtrip() {
        let receipt = BalanceTransferReceipt::new(
            Mosaic::new(MosaicId(3), Amount(700)),
            Address([0x01; 25]),
            Address([0x02; 25]),
        );
        let bytes = receipt.to_wire_bytes();
        assert_eq!(bytes.len(), receipt.wire_size());
        assert_eq!(BalanceTransferReceipt::from_wire_bytes(&bytes).unwrap(), receipt);
    }

    #[test]
    fn header_is_written_first() {
        let receipt = BalanceChangeReceipt::new(
            Mosaic::new(MosaicId(1), Amount(1)),
            Address([0x03; 25]),
        );
        let bytes = receipt.to_wire_bytes();
        // After the u32 size: version then type.
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 1);
        assert_eq!(
            u16::from_le_bytes([bytes[6], bytes[7]]),
            ReceiptType::BALANCE_CHANGE.0
        );
    }

    #[test]
    fn artifact_expiry_roundtrip() {
        let receipt = ArtifactExpiryReceipt::new(0xDEAD_BEEF_CAFE);
        let decoded = ArtifactExpiryReceipt::from_wire_bytes(&receipt.to_wire_bytes()).unwrap();
        assert_eq!(decoded, receipt);
    }

    #[test]
    fn inflation_roundtrip() {
        let receipt = InflationReceipt::new(Mosaic::new(MosaicId(9), Amount(1_000)));
        let decoded = InflationReceipt::from_wire_bytes(&receipt.to_wire_bytes()).unwrap();
        assert_eq!(decoded, receipt);
    }

    #[test]
    fn corrupt_size_is_rejected() {
        let receipt = InflationReceipt::new(Mosaic::new(MosaicId(9), Amount(1)));
        let mut bytes = receipt.to_wire_bytes();
        bytes[0] = bytes[0].wrapping_add(1);
        assert!(matches!(
            InflationReceipt::from_wire_bytes(&bytes).unwrap_err(),
            CodecError::StructuralInconsistency { entity: "InflationReceipt", .. }
        ));
    }

    #[test]
    fn unknown_receipt_type_is_tolerated() {
        // ReceiptType is open: a receipt with an unrecognized tag still
        // parses, because the tag does not drive the layout here.
        let mut receipt = InflationReceipt::new(Mosaic::new(MosaicId(9), Amount(1)));
        receipt.header.receipt_type = ReceiptType(0x5FFF);
        let decoded = InflationReceipt::from_wire_bytes(&receipt.to_wire_bytes()).unwrap();
        assert_eq!(decoded.header.receipt_type, ReceiptType(0x5FFF));
    }
}

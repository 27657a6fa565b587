//! Account restriction transaction bodies.
//!
//! Three sibling layouts that differ only in their value element type:
//! addresses, mosaic ids, or transaction types. The shared shape is
//! flags (u16), additions count (u8), deletions count (u8), reserved
//! (u32), then the two value runs back to back. A macro keeps the three
//! in lockstep.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::model::{AccountRestrictionFlags, MosaicId, TransactionType, UnresolvedAddress};

macro_rules! account_restriction_body {
    ($(#[$meta:meta])* $name:ident, $value_ty:ty, $value_size:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// What is being restricted, plus direction/negation bits.
            pub restriction_flags: AccountRestrictionFlags,
            /// Values added to the restriction list.
            pub restriction_additions: Vec<$value_ty>,
            /// Values removed from the restriction list.
            pub restriction_deletions: Vec<$value_ty>,
        }

        impl $name {
            /// Transaction version this body layout belongs to.
            pub const VERSION: u8 = 1;

            const FIXED_SIZE: usize = AccountRestrictionFlags::WIRE_SIZE + 1 + 1 + 4;

            /// Builds a restriction body, checking both runs fit their u8
            /// count prefixes.
            pub fn new(
                restriction_flags: AccountRestrictionFlags,
                restriction_additions: Vec<$value_ty>,
                restriction_deletions: Vec<$value_ty>,
            ) -> CodecResult<Self> {
                if restriction_additions.len() > u8::MAX as usize {
                    return Err(CodecError::InvalidArgument {
                        entity: stringify!($name),
                        field: "restriction_additions",
                        reason: format!(
                            "{} values exceeds the u8 count prefix maximum of 255",
                            restriction_additions.len()
                        ),
                    });
                }
                if restriction_deletions.len() > u8::MAX as usize {
                    return Err(CodecError::InvalidArgument {
                        entity: stringify!($name),
                        field: "restriction_deletions",
                        reason: format!(
                            "{} values exceeds the u8 count prefix maximum of 255",
                            restriction_deletions.len()
                        ),
                    });
                }
                Ok(Self {
                    restriction_flags,
                    restriction_additions,
                    restriction_deletions,
                })
            }
        }

        impl WireSerialize for $name {
            fn wire_size(&self) -> usize {
                Self::FIXED_SIZE
                    + (self.restriction_additions.len() + self.restriction_deletions.len())
                        * $value_size
            }

            fn write_to(&self, writer: &mut BinaryWriter) {
                self.restriction_flags.write_to(writer);
                writer.write_u8(self.restriction_additions.len() as u8);
                writer.write_u8(self.restriction_deletions.len() as u8);
                writer.write_zeros(4); // reserved
                for value in &self.restriction_additions {
                    value.write_to(writer);
                }
                for value in &self.restriction_deletions {
                    value.write_to(writer);
                }
            }
        }

        impl WireDeserialize for $name {
            fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
                let restriction_flags = AccountRestrictionFlags::read_from(reader)?;
                let additions_count = reader.read_u8(stringify!($name))? as usize;
                let deletions_count = reader.read_u8(stringify!($name))? as usize;
                reader.skip(4, stringify!($name))?; // reserved
                let mut restriction_additions = Vec::with_capacity(additions_count);
                for _ in 0..additions_count {
                    restriction_additions.push(<$value_ty>::read_from(reader)?);
                }
                let mut restriction_deletions = Vec::with_capacity(deletions_count);
                for _ in 0..deletions_count {
                    restriction_deletions.push(<$value_ty>::read_from(reader)?);
                }
                Ok(Self {
                    restriction_flags,
                    restriction_additions,
                    restriction_deletions,
                })
            }
        }
    };
}

account_restriction_body!(
    /// Allows or blocks interaction with specific addresses.
    AccountAddressRestrictionBody,
    UnresolvedAddress,
    UnresolvedAddress::WIRE_SIZE
);

account_restriction_body!(
    /// Allows or blocks receiving specific mosaics.
    AccountMosaicRestrictionBody,
    MosaicId,
    MosaicId::WIRE_SIZE
);

account_restriction_body!(
    /// Allows or blocks outgoing transactions of specific types.
    AccountOperationRestrictionBody,
    TransactionType,
    TransactionType::WIRE_SIZE
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_restriction_roundtrip() {
        let body = AccountAddressRestrictionBody::new(
            AccountRestrictionFlags::ADDRESS | AccountRestrictionFlags::BLOCK,
            vec![UnresolvedAddress([1; 24]), UnresolvedAddress([2; 24])],
            vec![UnresolvedAddress([3; 24])],
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 8 + 3 * 24);
        assert_eq!(
            AccountAddressRestrictionBody::from_wire_bytes(&bytes).unwrap(),
            body
        );
    }

    #[test]
    fn counts_precede_values() {
        let body = AccountAddressRestrictionBody::new(
            AccountRestrictionFlags::ADDRESS,
            vec![UnresolvedAddress([1; 24])],
            vec![],
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes[2], 1); // additions count
        assert_eq!(bytes[3], 0); // deletions count
        assert_eq!(&bytes[4..8], &[0, 0, 0, 0]); // reserved
    }

    #[test]
    fn mosaic_restriction_roundtrip() {
        let body = AccountMosaicRestrictionBody::new(
            AccountRestrictionFlags::MOSAIC_ID,
            vec![MosaicId(0xAA), MosaicId(0xBB)],
            vec![],
        )
        .unwrap();
        let decoded =
            AccountMosaicRestrictionBody::from_wire_bytes(&body.to_wire_bytes()).unwrap();
        assert_eq!(decoded, body);
    }

    #[test]
    fn operation_restriction_roundtrip() {
        let body = AccountOperationRestrictionBody::new(
            AccountRestrictionFlags::TRANSACTION_TYPE | AccountRestrictionFlags::OUTGOING,
            vec![TransactionType::Transfer, TransactionType::SecretProof],
            vec![TransactionType::AggregateComplete],
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 8 + 3 * 2);
        assert_eq!(
            AccountOperationRestrictionBody::from_wire_bytes(&bytes).unwrap(),
            body
        );
    }

    #[test]
    fn empty_lists_are_fixed_size() {
        let body = AccountMosaicRestrictionBody::new(
            AccountRestrictionFlags::MOSAIC_ID,
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(body.wire_size(), 8);
    }

    #[test]
    fn truncated_values_fail() {
        let body = AccountMosaicRestrictionBody::new(
            AccountRestrictionFlags::MOSAIC_ID,
            vec![MosaicId(1)],
            vec![],
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert!(AccountMosaicRestrictionBody::from_wire_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}

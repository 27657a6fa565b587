//! Wire enumerations.
//!
//! Two very different animals live here, and conflating them causes wire
//! bugs, so the types keep them apart:
//!
//! - **Open enumerations** are newtypes over the raw backing integer with a
//!   table of known constants. Decoding never rejects an unknown value --
//!   it round-trips verbatim, so old nodes tolerate values defined by
//!   newer protocol versions. `name()` is a lookup that may miss.
//! - **Closed discriminators** select a tagged-union variant. An unknown
//!   value makes the following bytes unparseable, so decoding fails with
//!   `InvalidDiscriminant`. These are real Rust enums.
//!
//! Flag enumerations are open enumerations whose members are independent
//! bits; a set of members encodes as their bitwise OR in the declared
//! width.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};

macro_rules! open_enum {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $width:expr, $read_fn:ident, $write_fn:ident,
     { $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $( $(#[$vmeta])* pub const $variant: Self = Self($value); )+

            /// Declared byte width on the wire.
            pub const WIRE_SIZE: usize = $width;

            /// Name of the known constant matching this value, if any.
            /// Unknown values are legal -- the domain is open.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some(stringify!($variant)), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}", name),
                    None => write!(f, "{:#X}", self.0),
                }
            }
        }

        impl WireSerialize for $name {
            fn wire_size(&self) -> usize {
                $width
            }

            fn write_to(&self, writer: &mut BinaryWriter) {
                writer.$write_fn(self.0);
            }
        }

        impl WireDeserialize for $name {
            fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
                Ok(Self(reader.$read_fn(stringify!($name))?))
            }
        }
    };
}

macro_rules! flag_enum {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $width:expr, $read_fn:ident, $write_fn:ident,
     { $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)? }) => {
        open_enum!($(#[$meta])* $name, $repr, $width, $read_fn, $write_fn,
            { $( $(#[$vmeta])* $variant = $value ),+ });

        impl $name {
            /// Bitwise OR of a set of members. Order-independent by
            /// construction.
            pub fn union<I: IntoIterator<Item = Self>>(flags: I) -> Self {
                let mut raw: $repr = 0;
                for flag in flags {
                    raw |= flag.0;
                }
                Self(raw)
            }

            /// Returns `true` if every bit of `flag` is set in `self`.
            pub fn contains(self, flag: Self) -> bool {
                self.0 & flag.0 == flag.0
            }

            /// Splits the value into the known single-bit members it
            /// contains. Bits without a named constant are not reported,
            /// but they survive re-serialization because the raw integer
            /// is what goes on the wire.
            pub fn decompose(self) -> Vec<Self> {
                [$( Self($value) ),+]
                    .into_iter()
                    .filter(|flag| flag.0 != 0 && self.contains(*flag))
                    .collect()
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

open_enum!(
    /// Network an entity is bound to. One byte in every envelope header.
    NetworkType, u8, 1, read_u8, write_u8,
    {
        /// Production network.
        MAINNET = 0x4D,
        /// Public test network.
        TESTNET = 0x54,
        /// Throwaway development network.
        DEVNET = 0x44,
    }
);

open_enum!(
    /// Whether an alias transaction links or unlinks.
    AliasAction, u8, 1, read_u8, write_u8,
    {
        UNLINK = 0,
        LINK = 1,
    }
);

open_enum!(
    /// Whether a key link transaction links or unlinks.
    LinkAction, u8, 1, read_u8, write_u8,
    {
        UNLINK = 0,
        LINK = 1,
    }
);

open_enum!(
    /// Direction of a mosaic supply change.
    MosaicSupplyChangeAction, u8, 1, read_u8, write_u8,
    {
        DECREASE = 0,
        INCREASE = 1,
    }
);

open_enum!(
    /// Comparison operator of a global mosaic restriction rule.
    MosaicRestrictionType, u8, 1, read_u8, write_u8,
    {
        NONE = 0,
        EQ = 1,
        NE = 2,
        LT = 3,
        LE = 4,
        GT = 5,
        GE = 6,
    }
);

open_enum!(
    /// Hash algorithm a secret lock commits to. The codec only carries the
    /// tag; evaluating the lock is the chain's business.
    LockHashAlgorithm, u8, 1, read_u8, write_u8,
    {
        BLAKE3 = 0,
        SHA256 = 1,
    }
);

open_enum!(
    /// What kind of object a metadata entry is attached to.
    MetadataType, u8, 1, read_u8, write_u8,
    {
        ACCOUNT = 0,
        MOSAIC = 1,
        NAMESPACE = 2,
    }
);

open_enum!(
    /// Receipt kind tag. Two bytes, grouped by family in the high byte.
    ReceiptType, u16, 2, read_u16, write_u16,
    {
        BALANCE_TRANSFER = 0x1143,
        BALANCE_CHANGE = 0x2143,
        ARTIFACT_EXPIRY = 0x3141,
        INFLATION = 0x4143,
    }
);

flag_enum!(
    /// Properties a mosaic is created with. Independent bits, combined by
    /// bitwise OR into a single byte.
    MosaicFlags, u8, 1, read_u8, write_u8,
    {
        NONE = 0x00,
        /// The owner may change the supply later.
        SUPPLY_MUTABLE = 0x01,
        /// Holders other than the owner may transfer it.
        TRANSFERABLE = 0x02,
        /// The owner may attach restriction rules.
        RESTRICTABLE = 0x04,
        /// The owner may revoke balances from holders.
        REVOKABLE = 0x08,
    }
);

flag_enum!(
    /// What an account restriction filters on, plus direction/negation
    /// modifier bits. Two bytes.
    AccountRestrictionFlags, u16, 2, read_u16, write_u16,
    {
        /// Values are addresses.
        ADDRESS = 0x0001,
        /// Values are mosaic ids.
        MOSAIC_ID = 0x0002,
        /// Values are transaction types.
        TRANSACTION_TYPE = 0x0004,
        /// Restriction applies to outgoing traffic.
        OUTGOING = 0x4000,
        /// Restriction blocks instead of allows.
        BLOCK = 0x8000,
    }
);

// ---------------------------------------------------------------------------
// Closed discriminators
// ---------------------------------------------------------------------------

/// Transaction kind tag. Two bytes in every envelope header.
///
/// Unlike the open enumerations above, this set is strictly closed: the tag
/// selects which body parser runs, so an unknown value makes the rest of
/// the stream meaningless and decoding fails with `InvalidDiscriminant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum TransactionType {
    Transfer = 0x0101,
    MosaicDefinition = 0x0201,
    MosaicSupplyChange = 0x0202,
    NamespaceRegistration = 0x0301,
    AddressAlias = 0x0302,
    MosaicAlias = 0x0303,
    AccountAddressRestriction = 0x0401,
    AccountMosaicRestriction = 0x0402,
    AccountOperationRestriction = 0x0403,
    MultisigAccountModification = 0x0601,
    AccountKeyLink = 0x0701,
    AccountMetadata = 0x0801,
    HashLock = 0x0901,
    SecretLock = 0x0902,
    SecretProof = 0x0903,
    AggregateComplete = 0x0A01,
    AggregateBonded = 0x0A02,
}

impl TransactionType {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = 2;

    /// The raw two-byte tag.
    pub fn raw(self) -> u16 {
        self as u16
    }

    /// Maps a raw tag to the closed set.
    pub fn from_raw(value: u16) -> CodecResult<Self> {
        Ok(match value {
            0x0101 => Self::Transfer,
            0x0201 => Self::MosaicDefinition,
            0x0202 => Self::MosaicSupplyChange,
            0x0301 => Self::NamespaceRegistration,
            0x0302 => Self::AddressAlias,
            0x0303 => Self::MosaicAlias,
            0x0401 => Self::AccountAddressRestriction,
            0x0402 => Self::AccountMosaicRestriction,
            0x0403 => Self::AccountOperationRestriction,
            0x0601 => Self::MultisigAccountModification,
            0x0701 => Self::AccountKeyLink,
            0x0801 => Self::AccountMetadata,
            0x0901 => Self::HashLock,
            0x0902 => Self::SecretLock,
            0x0903 => Self::SecretProof,
            0x0A01 => Self::AggregateComplete,
            0x0A02 => Self::AggregateBonded,
            other => {
                return Err(CodecError::InvalidDiscriminant {
                    entity: "TransactionType",
                    value: other as u64,
                })
            }
        })
    }
}

impl WireSerialize for TransactionType {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u16(self.raw());
    }
}

impl WireDeserialize for TransactionType {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let raw = reader.read_u16("TransactionType")?;
        Self::from_raw(raw)
    }
}

/// Whether a namespace registration creates a root or a child namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamespaceRegistrationType {
    Root = 0,
    Child = 1,
}

impl NamespaceRegistrationType {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = 1;

    /// The raw tag.
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Maps a raw tag to the closed set.
    pub fn from_raw(value: u8) -> CodecResult<Self> {
        match value {
            0 => Ok(Self::Root),
            1 => Ok(Self::Child),
            other => Err(CodecError::InvalidDiscriminant {
                entity: "NamespaceRegistrationType",
                value: other as u64,
            }),
        }
    }
}

impl WireSerialize for NamespaceRegistrationType {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.raw());
    }
}

impl WireDeserialize for NamespaceRegistrationType {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let raw = reader.read_u8("NamespaceRegistrationType")?;
        Self::from_raw(raw)
    }
}

/// Which payload a mosaic restriction state entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MosaicRestrictionEntryType {
    Address = 0,
    Global = 1,
}

impl MosaicRestrictionEntryType {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = 1;

    /// The raw tag.
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Maps a raw tag to the closed set.
    pub fn from_raw(value: u8) -> CodecResult<Self> {
        match value {
            0 => Ok(Self::Address),
            1 => Ok(Self::Global),
            other => Err(CodecError::InvalidDiscriminant {
                entity: "MosaicRestrictionEntryType",
                value: other as u64,
            }),
        }
    }
}

impl WireSerialize for MosaicRestrictionEntryType {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.raw());
    }
}

impl WireDeserialize for MosaicRestrictionEntryType {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let raw = reader.read_u8("MosaicRestrictionEntryType")?;
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_network_values() {
        assert_eq!(NetworkType::MAINNET.0, 0x4D);
        assert_eq!(NetworkType::MAINNET.name(), Some("MAINNET"));
        assert_eq!(NetworkType::TESTNET.name(), Some("TESTNET"));
    }

    #[test]
    fn unknown_enum_value_survives_roundtrip() {
        // The open domain: an unrecognized byte decodes fine, has no name,
        // and re-serializes to the identical byte.
        let bytes = [0x99];
        let network = NetworkType::from_wire_bytes(&bytes).unwrap();
        assert_eq!(network, NetworkType(0x99));
        assert_eq!(network.name(), None);
        assert_eq!(network.to_wire_bytes(), bytes);
    }

    #[test]
    fn unknown_two_byte_enum_roundtrip() {
        let bytes = [0xEE, 0x7F];
        let receipt_type = ReceiptType::from_wire_bytes(&bytes).unwrap();
        assert_eq!(receipt_type.0, 0x7FEE);
        assert_eq!(receipt_type.name(), None);
        assert_eq!(receipt_type.to_wire_bytes(), bytes);
    }

    #[test]
    fn display_uses_name_or_raw() {
        assert_eq!(NetworkType::MAINNET.to_string(), "MAINNET");
        assert_eq!(NetworkType(0x99).to_string(), "0x99");
    }

    #[test]
    fn flag_union_is_bitwise_or() {
        let flags = MosaicFlags::union([MosaicFlags::SUPPLY_MUTABLE, MosaicFlags::TRANSFERABLE]);
        assert_eq!(flags.0, 0x03);
        assert!(flags.contains(MosaicFlags::SUPPLY_MUTABLE));
        assert!(flags.contains(MosaicFlags::TRANSFERABLE));
        assert!(!flags.contains(MosaicFlags::RESTRICTABLE));
    }

    #[test]
    fn every_flag_subset_roundtrips() {
        let members = [
            MosaicFlags::SUPPLY_MUTABLE,
            MosaicFlags::TRANSFERABLE,
            MosaicFlags::RESTRICTABLE,
            MosaicFlags::REVOKABLE,
        ];
        // All 16 subsets of the four members.
        for mask in 0u8..16 {
            let subset: Vec<MosaicFlags> = members
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, f)| *f)
                .collect();
            let combined = MosaicFlags::union(subset.clone());
            let decoded = MosaicFlags::from_wire_bytes(&combined.to_wire_bytes()).unwrap();
            assert_eq!(decoded.decompose(), subset);
        }
    }

    #[test]
    fn unknown_flag_bits_survive_reserialization() {
        // Bit 6 has no named constant, but it must not be dropped.
        let flags = MosaicFlags(0x41);
        let decoded = MosaicFlags::from_wire_bytes(&flags.to_wire_bytes()).unwrap();
        assert_eq!(decoded.0, 0x41);
        assert_eq!(decoded.decompose(), vec![MosaicFlags::SUPPLY_MUTABLE]);
    }

    #[test]
    fn account_restriction_flags_compose() {
        let flags =
            AccountRestrictionFlags::ADDRESS | AccountRestrictionFlags::OUTGOING | AccountRestrictionFlags::BLOCK;
        assert_eq!(flags.0, 0xC001);
        assert_eq!(flags.to_wire_bytes(), vec![0x01, 0xC0]);
    }

    #[test]
    fn transaction_type_roundtrip() {
        for tx_type in [
            TransactionType::Transfer,
            TransactionType::NamespaceRegistration,
            TransactionType::AggregateBonded,
        ] {
            let decoded = TransactionType::from_wire_bytes(&tx_type.to_wire_bytes()).unwrap();
            assert_eq!(decoded, tx_type);
        }
    }

    #[test]
    fn unknown_transaction_type_is_rejected() {
        // Closed discriminator: unknown tags are fatal, not tolerated.
        let err = TransactionType::from_wire_bytes(&[0xFF, 0xFF]).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidDiscriminant {
                entity: "TransactionType",
                value: 0xFFFF,
            }
        );
    }

    #[test]
    fn registration_type_rejects_unknown() {
        assert!(NamespaceRegistrationType::from_raw(0).is_ok());
        assert!(NamespaceRegistrationType::from_raw(1).is_ok());
        assert!(NamespaceRegistrationType::from_raw(2).is_err());
    }

    #[test]
    fn restriction_entry_type_raw_values() {
        assert_eq!(MosaicRestrictionEntryType::Address.raw(), 0);
        assert_eq!(MosaicRestrictionEntryType::Global.raw(), 1);
        assert!(MosaicRestrictionEntryType::from_raw(7).is_err());
    }
}

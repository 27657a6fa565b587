//! Restriction state entries.
//!
//! Two record families live here. [`MosaicRestrictionEntry`] is the
//! textbook tagged union: a one-byte entry type selects between an
//! ADDRESS payload and a GLOBAL payload, exactly one of which exists, and
//! asking for the wrong one is an `InvalidState` error.
//! [`AccountRestrictionsEntry`] is the u64-count case: each restriction
//! carries a 64-bit value count, and the value element type follows the
//! restriction's flag group.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::model::{
    AccountRestrictionFlags, Address, MosaicId, MosaicRestrictionEntryType, MosaicRestrictionType,
    RestrictionKey, TransactionType, UnresolvedAddress,
};

use super::StateHeader;

// ---------------------------------------------------------------------------
// Mosaic restrictions
// ---------------------------------------------------------------------------

/// One (key, value) rule of an address-scoped mosaic restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRestrictionPair {
    /// The restriction key.
    pub key: RestrictionKey,
    /// The value assigned to this account for that key.
    pub value: u64,
}

impl AddressRestrictionPair {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = RestrictionKey::WIRE_SIZE + 8;
}

impl WireSerialize for AddressRestrictionPair {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.key.write_to(writer);
        writer.write_u64(self.value);
    }
}

impl WireDeserialize for AddressRestrictionPair {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let key = RestrictionKey::read_from(reader)?;
        let value = reader.read_u64("AddressRestrictionPair")?;
        Ok(Self { key, value })
    }
}

/// One rule of a global mosaic restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRestrictionRule {
    /// The restriction key.
    pub key: RestrictionKey,
    /// Mosaic whose address restrictions the rule evaluates against;
    /// zero means "this mosaic".
    pub reference_mosaic_id: MosaicId,
    /// The value the comparison runs against.
    pub restriction_value: u64,
    /// The comparison operator.
    pub restriction_type: MosaicRestrictionType,
}

impl GlobalRestrictionRule {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize =
        RestrictionKey::WIRE_SIZE + MosaicId::WIRE_SIZE + 8 + MosaicRestrictionType::WIRE_SIZE;
}

impl WireSerialize for GlobalRestrictionRule {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.key.write_to(writer);
        self.reference_mosaic_id.write_to(writer);
        writer.write_u64(self.restriction_value);
        self.restriction_type.write_to(writer);
    }
}

impl WireDeserialize for GlobalRestrictionRule {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let key = RestrictionKey::read_from(reader)?;
        let reference_mosaic_id = MosaicId::read_from(reader)?;
        let restriction_value = reader.read_u64("GlobalRestrictionRule")?;
        let restriction_type = MosaicRestrictionType::read_from(reader)?;
        Ok(Self {
            key,
            reference_mosaic_id,
            restriction_value,
            restriction_type,
        })
    }
}

/// The ADDRESS payload: per-account restriction values for one mosaic.
///
/// Wire layout: mosaic id (u64), address (25), rule count (u8), rules
/// (16 each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicAddressRestriction {
    /// The restricted mosaic.
    pub mosaic_id: MosaicId,
    /// The account the values apply to.
    pub address: Address,
    /// The (key, value) rules.
    pub restrictions: Vec<AddressRestrictionPair>,
}

impl MosaicAddressRestriction {
    /// Builds the payload, checking the rules fit their u8 count prefix.
    pub fn new(
        mosaic_id: MosaicId,
        address: Address,
        restrictions: Vec<AddressRestrictionPair>,
    ) -> CodecResult<Self> {
        if restrictions.len() > u8::MAX as usize {
            return Err(CodecError::InvalidArgument {
                entity: "MosaicAddressRestriction",
                field: "restrictions",
                reason: format!(
                    "{} rules exceeds the u8 count prefix maximum of 255",
                    restrictions.len()
                ),
            });
        }
        Ok(Self {
            mosaic_id,
            address,
            restrictions,
        })
    }
}

impl WireSerialize for MosaicAddressRestriction {
    fn wire_size(&self) -> usize {
        MosaicId::WIRE_SIZE
            + Address::WIRE_SIZE
            + 1
            + self.restrictions.len() * AddressRestrictionPair::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.mosaic_id.write_to(writer);
        self.address.write_to(writer);
        writer.write_u8(self.restrictions.len() as u8);
        for pair in &self.restrictions {
            pair.write_to(writer);
        }
    }
}

impl WireDeserialize for MosaicAddressRestriction {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let mosaic_id = MosaicId::read_from(reader)?;
        let address = Address::read_from(reader)?;
        let count = reader.read_u8("MosaicAddressRestriction")? as usize;
        let mut restrictions = Vec::with_capacity(count);
        for _ in 0..count {
            restrictions.push(AddressRestrictionPair::read_from(reader)?);
        }
        Ok(Self {
            mosaic_id,
            address,
            restrictions,
        })
    }
}

/// The GLOBAL payload: mosaic-wide restriction rules.
///
/// Wire layout: mosaic id (u64), rule count (u8), rules (25 each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicGlobalRestriction {
    /// The restricted mosaic.
    pub mosaic_id: MosaicId,
    /// The rules.
    pub restrictions: Vec<GlobalRestrictionRule>,
}

impl MosaicGlobalRestriction {
    /// Builds the payload, checking the rules fit their u8 count prefix.
    pub fn new(
        mosaic_id: MosaicId,
        restrictions: Vec<GlobalRestrictionRule>,
    ) -> CodecResult<Self> {
        if restrictions.len() > u8::MAX as usize {
            return Err(CodecError::InvalidArgument {
                entity: "MosaicGlobalRestriction",
                field: "restrictions",
                reason: format!(
                    "{} rules exceeds the u8 count prefix maximum of 255",
                    restrictions.len()
                ),
            });
        }
        Ok(Self {
            mosaic_id,
            restrictions,
        })
    }
}

impl WireSerialize for MosaicGlobalRestriction {
    fn wire_size(&self) -> usize {
        MosaicId::WIRE_SIZE + 1 + self.restrictions.len() * GlobalRestrictionRule::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.mosaic_id.write_to(writer);
        writer.write_u8(self.restrictions.len() as u8);
        for rule in &self.restrictions {
            rule.write_to(writer);
        }
    }
}

impl WireDeserialize for MosaicGlobalRestriction {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let mosaic_id = MosaicId::read_from(reader)?;
        let count = reader.read_u8("MosaicGlobalRestriction")? as usize;
        let mut restrictions = Vec::with_capacity(count);
        for _ in 0..count {
            restrictions.push(GlobalRestrictionRule::read_from(reader)?);
        }
        Ok(Self {
            mosaic_id,
            restrictions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum RestrictionPayload {
    Address(MosaicAddressRestriction),
    Global(MosaicGlobalRestriction),
}

/// A mosaic restriction state entry: header, entry type, and exactly one
/// of the two payloads.
///
/// Wire layout: version (u16), entry type (u8), then the ADDRESS or
/// GLOBAL payload selected by the type.
///
/// Constructed through [`address`](Self::address) or
/// [`global`](Self::global) -- one entry point per variant, never an
/// ambiguous union -- and immutable afterwards. Size and serialization
/// include only the populated variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicRestrictionEntry {
    /// Common state entry prefix, written first.
    pub header: StateHeader,
    payload: RestrictionPayload,
}

impl MosaicRestrictionEntry {
    /// Creates an ADDRESS entry. The discriminator is implied by this
    /// entry point.
    pub fn address(payload: MosaicAddressRestriction) -> Self {
        Self {
            header: StateHeader::current(),
            payload: RestrictionPayload::Address(payload),
        }
    }

    /// Creates a GLOBAL entry. The discriminator is implied by this entry
    /// point.
    pub fn global(payload: MosaicGlobalRestriction) -> Self {
        Self {
            header: StateHeader::current(),
            payload: RestrictionPayload::Global(payload),
        }
    }

    /// Which variant is populated.
    pub fn entry_type(&self) -> MosaicRestrictionEntryType {
        match self.payload {
            RestrictionPayload::Address(_) => MosaicRestrictionEntryType::Address,
            RestrictionPayload::Global(_) => MosaicRestrictionEntryType::Global,
        }
    }

    /// Borrows the ADDRESS payload; fails if the GLOBAL variant is active.
    pub fn as_address(&self) -> CodecResult<&MosaicAddressRestriction> {
        match &self.payload {
            RestrictionPayload::Address(payload) => Ok(payload),
            RestrictionPayload::Global(_) => Err(CodecError::InvalidState {
                entity: "MosaicRestrictionEntry",
                expected: "ADDRESS",
                actual: "GLOBAL",
            }),
        }
    }

    /// Borrows the GLOBAL payload; fails if the ADDRESS variant is active.
    pub fn as_global(&self) -> CodecResult<&MosaicGlobalRestriction> {
        match &self.payload {
            RestrictionPayload::Global(payload) => Ok(payload),
            RestrictionPayload::Address(_) => Err(CodecError::InvalidState {
                entity: "MosaicRestrictionEntry",
                expected: "GLOBAL",
                actual: "ADDRESS",
            }),
        }
    }
}

impl WireSerialize for MosaicRestrictionEntry {
    fn wire_size(&self) -> usize {
        self.header.wire_size()
            + MosaicRestrictionEntryType::WIRE_SIZE
            + match &self.payload {
                RestrictionPayload::Address(payload) => payload.wire_size(),
                RestrictionPayload::Global(payload) => payload.wire_size(),
            }
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.header.write_to(writer);
        self.entry_type().write_to(writer);
        match &self.payload {
            RestrictionPayload::Address(payload) => payload.write_to(writer),
            RestrictionPayload::Global(payload) => payload.write_to(writer),
        }
    }
}

impl WireDeserialize for MosaicRestrictionEntry {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let header = StateHeader::read_from(reader)?;
        let entry_type = MosaicRestrictionEntryType::read_from(reader)?;
        let payload = match entry_type {
            MosaicRestrictionEntryType::Address => {
                RestrictionPayload::Address(MosaicAddressRestriction::read_from(reader)?)
            }
            MosaicRestrictionEntryType::Global => {
                RestrictionPayload::Global(MosaicGlobalRestriction::read_from(reader)?)
            }
        };
        Ok(Self { header, payload })
    }
}

// ---------------------------------------------------------------------------
// Account restrictions
// ---------------------------------------------------------------------------

/// The values of one account restriction; the element type follows the
/// restriction's flag group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRestrictionValues {
    /// Values for `ADDRESS`-flagged restrictions.
    Addresses(Vec<UnresolvedAddress>),
    /// Values for `MOSAIC_ID`-flagged restrictions.
    MosaicIds(Vec<MosaicId>),
    /// Values for `TRANSACTION_TYPE`-flagged restrictions.
    TransactionTypes(Vec<TransactionType>),
}

impl AccountRestrictionValues {
    fn len(&self) -> usize {
        match self {
            Self::Addresses(values) => values.len(),
            Self::MosaicIds(values) => values.len(),
            Self::TransactionTypes(values) => values.len(),
        }
    }
}

/// One restriction of an account: flags plus the matching value list.
///
/// Wire layout: flags (u16), reserved (u32), value count (u64), values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRestriction {
    /// What is filtered, plus direction/negation bits.
    pub restriction_flags: AccountRestrictionFlags,
    /// The filter values.
    pub values: AccountRestrictionValues,
}

// The low three flag bits pick the value element type, so they act as a
// closed discriminator even though the flag enumeration itself is open.
const VALUE_KIND_MASK: u16 = 0x0007;

impl AccountRestriction {
    /// Builds a restriction, checking the value list matches the flag
    /// group.
    pub fn new(
        restriction_flags: AccountRestrictionFlags,
        values: AccountRestrictionValues,
    ) -> CodecResult<Self> {
        let kind = restriction_flags.0 & VALUE_KIND_MASK;
        let matches = matches!(
            (&values, kind),
            (AccountRestrictionValues::Addresses(_), 0x0001)
                | (AccountRestrictionValues::MosaicIds(_), 0x0002)
                | (AccountRestrictionValues::TransactionTypes(_), 0x0004)
        );
        if !matches {
            return Err(CodecError::InvalidArgument {
                entity: "AccountRestriction",
                field: "values",
                reason: "value list kind does not match the restriction flags".to_string(),
            });
        }
        Ok(Self {
            restriction_flags,
            values,
        })
    }
}

impl WireSerialize for AccountRestriction {
    fn wire_size(&self) -> usize {
        let element_size = match &self.values {
            AccountRestrictionValues::Addresses(_) => UnresolvedAddress::WIRE_SIZE,
            AccountRestrictionValues::MosaicIds(_) => MosaicId::WIRE_SIZE,
            AccountRestrictionValues::TransactionTypes(_) => TransactionType::WIRE_SIZE,
        };
        AccountRestrictionFlags::WIRE_SIZE + 4 + 8 + self.values.len() * element_size
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.restriction_flags.write_to(writer);
        writer.write_zeros(4); // reserved
        writer.write_u64(self.values.len() as u64);
        match &self.values {
            AccountRestrictionValues::Addresses(values) => {
                for value in values {
                    value.write_to(writer);
                }
            }
            AccountRestrictionValues::MosaicIds(values) => {
                for value in values {
                    value.write_to(writer);
                }
            }
            AccountRestrictionValues::TransactionTypes(values) => {
                for value in values {
                    value.write_to(writer);
                }
            }
        }
    }
}

impl WireDeserialize for AccountRestriction {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let restriction_flags = AccountRestrictionFlags::read_from(reader)?;
        reader.skip(4, "AccountRestriction")?; // reserved
        let count = reader.read_u64("AccountRestriction")? as usize;
        // No pre-allocation from an attacker-controlled u64; the reads
        // below fail fast on a short stream.
        let values = match restriction_flags.0 & VALUE_KIND_MASK {
            0x0001 => {
                let mut values = Vec::new();
                for _ in 0..count {
                    values.push(UnresolvedAddress::read_from(reader)?);
                }
                AccountRestrictionValues::Addresses(values)
            }
            0x0002 => {
                let mut values = Vec::new();
                for _ in 0..count {
                    values.push(MosaicId::read_from(reader)?);
                }
                AccountRestrictionValues::MosaicIds(values)
            }
            0x0004 => {
                let mut values = Vec::new();
                for _ in 0..count {
                    values.push(TransactionType::read_from(reader)?);
                }
                AccountRestrictionValues::TransactionTypes(values)
            }
            other => {
                return Err(CodecError::InvalidDiscriminant {
                    entity: "AccountRestriction",
                    value: other as u64,
                })
            }
        };
        Ok(Self {
            restriction_flags,
            values,
        })
    }
}

/// An account restrictions state entry.
///
/// Wire layout: version (u16), address (25), restriction count (u64),
/// restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRestrictionsEntry {
    /// Common state entry prefix, written first.
    pub header: StateHeader,
    /// The restricted account.
    pub address: Address,
    /// Its restrictions.
    pub restrictions: Vec<AccountRestriction>,
}

impl AccountRestrictionsEntry {
    /// Builds an entry at the current layout version.
    pub fn new(address: Address, restrictions: Vec<AccountRestriction>) -> Self {
        Self {
            header: StateHeader::current(),
            address,
            restrictions,
        }
    }
}

impl WireSerialize for AccountRestrictionsEntry {
    fn wire_size(&self) -> usize {
        self.header.wire_size()
            + Address::WIRE_SIZE
            + 8
            + self
                .restrictions
                .iter()
                .map(|restriction| restriction.wire_size())
                .sum::<usize>()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.header.write_to(writer);
        self.address.write_to(writer);
        writer.write_u64(self.restrictions.len() as u64);
        for restriction in &self.restrictions {
            restriction.write_to(writer);
        }
    }
}

impl WireDeserialize for AccountRestrictionsEntry {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let header = StateHeader::read_from(reader)?;
        let address = Address::read_from(reader)?;
        let count = reader.read_u64("AccountRestrictionsEntry")? as usize;
        let mut restrictions = Vec::new();
        for _ in 0..count {
            restrictions.push(AccountRestriction::read_from(reader)?);
        }
        Ok(Self {
            header,
            address,
            restrictions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_payload() -> MosaicAddressRestriction {
        MosaicAddressRestriction::new(
            MosaicId(0xCAFE),
            Address([0x31; 25]),
            vec![
                AddressRestrictionPair {
                    key: RestrictionKey(1),
                    value: 100,
                },
                AddressRestrictionPair {
                    key: RestrictionKey(2),
                    value: 200,
                },
            ],
        )
        .unwrap()
    }

    fn global_payload() -> MosaicGlobalRestriction {
        MosaicGlobalRestriction::new(
            MosaicId(0xCAFE),
            vec![GlobalRestrictionRule {
                key: RestrictionKey(1),
                reference_mosaic_id: MosaicId(0),
                restriction_value: 5,
                restriction_type: MosaicRestrictionType::GE,
            }],
        )
        .unwrap()
    }

    #[test]
    fn address_entry_roundtrip() {
        let entry = MosaicRestrictionEntry::address(address_payload());
        let bytes = entry.to_wire_bytes();
        assert_eq!(bytes.len(), entry.wire_size());
        let decoded = MosaicRestrictionEntry::from_wire_bytes(&bytes).unwrap();
        assert_eq!(decoded, entry);
        assert_eq!(decoded.entry_type(), MosaicRestrictionEntryType::Address);
        assert_eq!(decoded.as_address().unwrap().restrictions.len(), 2);
    }

    #[test]
    fn global_entry_roundtrip() {
        let entry = MosaicRestrictionEntry::global(global_payload());
        let decoded = MosaicRestrictionEntry::from_wire_bytes(&entry.to_wire_bytes()).unwrap();
        assert_eq!(decoded.entry_type(), MosaicRestrictionEntryType::Global);
        assert_eq!(
            decoded.as_global().unwrap().restrictions[0].restriction_type,
            MosaicRestrictionType::GE
        );
    }

    #[test]
    fn address_entry_rejects_global_accessor() {
        // The tagged-union exclusivity property: the wrong accessor is an
        // InvalidState error, and the error names both variants.
        let entry = MosaicRestrictionEntry::address(address_payload());
        let err = entry.as_global().unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidState {
                entity: "MosaicRestrictionEntry",
                expected: "GLOBAL",
                actual: "ADDRESS",
            }
        );
        // And the ADDRESS branch with its payload is what round-trips.
        let decoded = MosaicRestrictionEntry::from_wire_bytes(&entry.to_wire_bytes()).unwrap();
        assert!(decoded.as_address().is_ok());
        assert!(decoded.as_global().is_err());
    }

    #[test]
    fn global_entry_rejects_address_accessor() {
        let entry = MosaicRestrictionEntry::global(global_payload());
        assert!(matches!(
            entry.as_address().unwrap_err(),
            CodecError::InvalidState { expected: "ADDRESS", actual: "GLOBAL", .. }
        ));
    }

    #[test]
    fn unknown_entry_type_is_rejected() {
        let entry = MosaicRestrictionEntry::address(address_payload());
        let mut bytes = entry.to_wire_bytes();
        bytes[2] = 7; // entry type byte after the u16 version
        assert!(matches!(
            MosaicRestrictionEntry::from_wire_bytes(&bytes).unwrap_err(),
            CodecError::InvalidDiscriminant { entity: "MosaicRestrictionEntryType", value: 7 }
        ));
    }

    #[test]
    fn account_restrictions_roundtrip() {
        let entry = AccountRestrictionsEntry::new(
            Address([0x77; 25]),
            vec![
                AccountRestriction::new(
                    AccountRestrictionFlags::ADDRESS | AccountRestrictionFlags::BLOCK,
                    AccountRestrictionValues::Addresses(vec![UnresolvedAddress([1; 24])]),
                )
                .unwrap(),
                AccountRestriction::new(
                    AccountRestrictionFlags::TRANSACTION_TYPE | AccountRestrictionFlags::OUTGOING,
                    AccountRestrictionValues::TransactionTypes(vec![
                        TransactionType::Transfer,
                        TransactionType::AccountKeyLink,
                    ]),
                )
                .unwrap(),
            ],
        );
        let bytes = entry.to_wire_bytes();
        assert_eq!(bytes.len(), entry.wire_size());
        assert_eq!(AccountRestrictionsEntry::from_wire_bytes(&bytes).unwrap(), entry);
    }

    #[test]
    fn value_count_is_eight_bytes() {
        let entry = AccountRestrictionsEntry::new(
            Address([0; 25]),
            vec![AccountRestriction::new(
                AccountRestrictionFlags::MOSAIC_ID,
                AccountRestrictionValues::MosaicIds(vec![MosaicId(0xAB)]),
            )
            .unwrap()],
        );
        let bytes = entry.to_wire_bytes();
        // version (2) + address (25) + count (8) + flags (2) + reserved (4),
        // then the u64 value count.
        let offset = 2 + 25 + 8 + 2 + 4;
        assert_eq!(
            u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap()),
            1
        );
    }

    #[test]
    fn mismatched_value_kind_rejected() {
        let err = AccountRestriction::new(
            AccountRestrictionFlags::ADDRESS,
            AccountRestrictionValues::MosaicIds(vec![MosaicId(1)]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidArgument { entity: "AccountRestriction", field: "values", .. }
        ));
    }

    #[test]
    fn flags_without_value_kind_fail_decode() {
        // Only the OUTGOING bit set: no value group, nothing to parse.
        let restriction = AccountRestriction {
            restriction_flags: AccountRestrictionFlags::OUTGOING,
            values: AccountRestrictionValues::Addresses(vec![]),
        };
        let bytes = restriction.to_wire_bytes();
        assert!(matches!(
            AccountRestriction::from_wire_bytes(&bytes).unwrap_err(),
            CodecError::InvalidDiscriminant { entity: "AccountRestriction", value: 0 }
        ));
    }
}

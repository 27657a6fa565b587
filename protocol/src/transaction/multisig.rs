//! Multisig account modification and account key link bodies.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::model::{LinkAction, PublicKey, UnresolvedAddress};

/// Body of a multisig account modification transaction.
///
/// Wire layout: min removal delta (i8), min approval delta (i8),
/// additions count (u8), deletions count (u8), reserved (u32), address
/// additions (24 each), address deletions (24 each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigAccountModificationBody {
    /// Change to the number of cosignatories required to remove one.
    pub min_removal_delta: i8,
    /// Change to the number of cosignatories required to approve a
    /// transaction.
    pub min_approval_delta: i8,
    /// Cosignatories to add.
    pub address_additions: Vec<UnresolvedAddress>,
    /// Cosignatories to remove.
    pub address_deletions: Vec<UnresolvedAddress>,
}

impl MultisigAccountModificationBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    const FIXED_SIZE: usize = 1 + 1 + 1 + 1 + 4;

    /// Builds a modification body, checking both runs fit their u8 count
    /// prefixes.
    pub fn new(
        min_removal_delta: i8,
        min_approval_delta: i8,
        address_additions: Vec<UnresolvedAddress>,
        address_deletions: Vec<UnresolvedAddress>,
    ) -> CodecResult<Self> {
        if address_additions.len() > u8::MAX as usize {
            return Err(CodecError::InvalidArgument {
                entity: "MultisigAccountModificationBody",
                field: "address_additions",
                reason: format!(
                    "{} addresses exceeds the u8 count prefix maximum of 255",
                    address_additions.len()
                ),
            });
        }
        if address_deletions.len() > u8::MAX as usize {
            return Err(CodecError::InvalidArgument {
                entity: "MultisigAccountModificationBody",
                field: "address_deletions",
                reason: format!(
                    "{} addresses exceeds the u8 count prefix maximum of 255",
                    address_deletions.len()
                ),
            });
        }
        Ok(Self {
            min_removal_delta,
            min_approval_delta,
            address_additions,
            address_deletions,
        })
    }
}

impl WireSerialize for MultisigAccountModificationBody {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE
            + (self.address_additions.len() + self.address_deletions.len())
                * UnresolvedAddress::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_i8(self.min_removal_delta);
        writer.write_i8(self.min_approval_delta);
        writer.write_u8(self.address_additions.len() as u8);
        writer.write_u8(self.address_deletions.len() as u8);
        writer.write_zeros(4); // reserved
        for address in &self.address_additions {
            address.write_to(writer);
        }
        for address in &self.address_deletions {
            address.write_to(writer);
        }
    }
}

impl WireDeserialize for MultisigAccountModificationBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let min_removal_delta = reader.read_i8("MultisigAccountModificationBody")?;
        let min_approval_delta = reader.read_i8("MultisigAccountModificationBody")?;
        let additions_count = reader.read_u8("MultisigAccountModificationBody")? as usize;
        let deletions_count = reader.read_u8("MultisigAccountModificationBody")? as usize;
        reader.skip(4, "MultisigAccountModificationBody")?; // reserved
        let mut address_additions = Vec::with_capacity(additions_count);
        for _ in 0..additions_count {
            address_additions.push(UnresolvedAddress::read_from(reader)?);
        }
        let mut address_deletions = Vec::with_capacity(deletions_count);
        for _ in 0..deletions_count {
            address_deletions.push(UnresolvedAddress::read_from(reader)?);
        }
        Ok(Self {
            min_removal_delta,
            min_approval_delta,
            address_additions,
            address_deletions,
        })
    }
}

/// Body of an account key link transaction.
///
/// Wire layout: linked public key (32), action (u8) -- 33 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKeyLinkBody {
    /// The remote public key being linked.
    pub linked_public_key: PublicKey,
    /// Link or unlink.
    pub link_action: LinkAction,
}

impl AccountKeyLinkBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = PublicKey::WIRE_SIZE + LinkAction::WIRE_SIZE;
}

impl WireSerialize for AccountKeyLinkBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.linked_public_key.write_to(writer);
        self.link_action.write_to(writer);
    }
}

impl WireDeserialize for AccountKeyLinkBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let linked_public_key = PublicKey::read_from(reader)?;
        let link_action = LinkAction::read_from(reader)?;
        Ok(Self {
            linked_public_key,
            link_action,
        })
    }
}

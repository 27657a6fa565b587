//! Namespace registration and alias bodies.
//!
//! Registration is the conditional-payload case: a root registration
//! carries a duration, a child registration carries a parent id, and the
//! two are mutually exclusive. The discriminator is never supplied by the
//! caller -- each factory implies it -- while the decode path reads the
//! discriminator byte first and then only the matching optional field.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::config::MAX_NAMESPACE_NAME_SIZE;
use crate::model::{AliasAction, BlockDuration, MosaicId, NamespaceId, NamespaceRegistrationType, UnresolvedAddress};

/// The variant payload of a namespace registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Registration {
    /// Root namespaces rent their name for a number of blocks.
    Root { duration: BlockDuration },
    /// Child namespaces live exactly as long as their parent.
    Child { parent_id: NamespaceId },
}

/// Body of a namespace registration transaction.
///
/// Wire layout: registration type (u8), id (u64), name size (u8), name
/// bytes, then duration (u64, root) or parent id (u64, child).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRegistrationBody {
    registration: Registration,
    /// The id the namespace will have, derived off-chain from the name
    /// (and the parent id for children).
    pub id: NamespaceId,
    /// UTF-8 name bytes.
    pub name: Vec<u8>,
}

impl NamespaceRegistrationBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    fn validate_name(name: &[u8]) -> CodecResult<()> {
        if name.is_empty() {
            return Err(CodecError::InvalidArgument {
                entity: "NamespaceRegistrationBody",
                field: "name",
                reason: "a namespace name must not be empty".to_string(),
            });
        }
        if name.len() > MAX_NAMESPACE_NAME_SIZE {
            return Err(CodecError::InvalidArgument {
                entity: "NamespaceRegistrationBody",
                field: "name",
                reason: format!(
                    "{} bytes exceeds the u8 size prefix maximum of {}",
                    name.len(),
                    MAX_NAMESPACE_NAME_SIZE
                ),
            });
        }
        Ok(())
    }

    /// Creates a root registration. The ROOT discriminator is implied by
    /// this entry point.
    pub fn root(id: NamespaceId, name: Vec<u8>, duration: BlockDuration) -> CodecResult<Self> {
        Self::validate_name(&name)?;
        Ok(Self {
            registration: Registration::Root { duration },
            id,
            name,
        })
    }

    /// Creates a child registration. The CHILD discriminator is implied by
    /// this entry point.
    pub fn child(id: NamespaceId, name: Vec<u8>, parent_id: NamespaceId) -> CodecResult<Self> {
        Self::validate_name(&name)?;
        Ok(Self {
            registration: Registration::Child { parent_id },
            id,
            name,
        })
    }

    /// Which kind of registration this is.
    pub fn registration_type(&self) -> NamespaceRegistrationType {
        match self.registration {
            Registration::Root { .. } => NamespaceRegistrationType::Root,
            Registration::Child { .. } => NamespaceRegistrationType::Child,
        }
    }

    /// The rental duration. Fails unless this is a root registration.
    pub fn duration(&self) -> CodecResult<BlockDuration> {
        match self.registration {
            Registration::Root { duration } => Ok(duration),
            Registration::Child { .. } => Err(CodecError::InvalidState {
                entity: "NamespaceRegistrationBody",
                expected: "ROOT",
                actual: "CHILD",
            }),
        }
    }

    /// The parent namespace id. Fails unless this is a child registration.
    pub fn parent_id(&self) -> CodecResult<NamespaceId> {
        match self.registration {
            Registration::Child { parent_id } => Ok(parent_id),
            Registration::Root { .. } => Err(CodecError::InvalidState {
                entity: "NamespaceRegistrationBody",
                expected: "CHILD",
                actual: "ROOT",
            }),
        }
    }
}

impl WireSerialize for NamespaceRegistrationBody {
    fn wire_size(&self) -> usize {
        // Both variants are 8 bytes, so the size does not branch.
        NamespaceRegistrationType::WIRE_SIZE + NamespaceId::WIRE_SIZE + 1 + self.name.len() + 8
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.registration_type().write_to(writer);
        self.id.write_to(writer);
        writer.write_u8(self.name.len() as u8);
        writer.write_bytes(&self.name);
        match self.registration {
            Registration::Root { duration } => duration.write_to(writer),
            Registration::Child { parent_id } => parent_id.write_to(writer),
        }
    }
}

impl WireDeserialize for NamespaceRegistrationBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let registration_type = NamespaceRegistrationType::read_from(reader)?;
        let id = NamespaceId::read_from(reader)?;
        let name_size = reader.read_u8("NamespaceRegistrationBody")? as usize;
        let name = reader.read_vec(name_size, "NamespaceRegistrationBody")?;
        let registration = match registration_type {
            NamespaceRegistrationType::Root => Registration::Root {
                duration: BlockDuration::read_from(reader)?,
            },
            NamespaceRegistrationType::Child => Registration::Child {
                parent_id: NamespaceId::read_from(reader)?,
            },
        };
        Ok(Self {
            registration,
            id,
            name,
        })
    }
}

/// Body of an address alias transaction.
///
/// Wire layout: namespace id (u64), address (24), action (u8) -- 33 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressAliasBody {
    /// The namespace acting as the alias.
    pub namespace_id: NamespaceId,
    /// The address the alias points at.
    pub address: UnresolvedAddress,
    /// Link or unlink.
    pub alias_action: AliasAction,
}

impl AddressAliasBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize =
        NamespaceId::WIRE_SIZE + UnresolvedAddress::WIRE_SIZE + AliasAction::WIRE_SIZE;
}

impl WireSerialize for AddressAliasBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.namespace_id.write_to(writer);
        self.address.write_to(writer);
        self.alias_action.write_to(writer);
    }
}

impl WireDeserialize for AddressAliasBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let namespace_id = NamespaceId::read_from(reader)?;
        let address = UnresolvedAddress::read_from(reader)?;
        let alias_action = AliasAction::read_from(reader)?;
        Ok(Self {
            namespace_id,
            address,
            alias_action,
        })
    }
}

/// Body of a mosaic alias transaction.
///
/// Wire layout: namespace id (u64), mosaic id (u64), action (u8) -- 17 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicAliasBody {
    /// The namespace acting as the alias.
    pub namespace_id: NamespaceId,
    /// The mosaic the alias points at.
    pub mosaic_id: MosaicId,
    /// Link or unlink.
    pub alias_action: AliasAction,
}

impl MosaicAliasBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize =
        NamespaceId::WIRE_SIZE + MosaicId::WIRE_SIZE + AliasAction::WIRE_SIZE;
}

impl WireSerialize for MosaicAliasBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.namespace_id.write_to(writer);
        self.mosaic_id.write_to(writer);
        self.alias_action.write_to(writer);
    }
}

impl WireDeserialize for MosaicAliasBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let namespace_id = NamespaceId::read_from(reader)?;
        let mosaic_id = MosaicId::read_from(reader)?;
        let alias_action = AliasAction::read_from(reader)?;
        Ok(Self {
            namespace_id,
            mosaic_id,
            alias_action,
        })
    }
}

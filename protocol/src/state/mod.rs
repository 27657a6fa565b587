//! # State Entries
//!
//! Wire formats for the chain-state records the network exposes: account
//! restrictions, mosaic restrictions, and metadata. These are read far
//! more often than written (every API node serves them), so their layouts
//! are as strict as the transaction formats.
//!
//! Every entry starts with the shared [`StateHeader`] -- written first,
//! included first in every size computation.
//!
//! ```text
//! restriction.rs — MosaicRestrictionEntry (tagged ADDRESS/GLOBAL union),
//!                  AccountRestrictionsEntry (u64-count collections)
//! metadata.rs    — MetadataEntry (u16 size-prefixed value)
//! ```

pub mod metadata;
pub mod restriction;

use serde::{Deserialize, Serialize};

use crate::codec::{BinaryReader, BinaryWriter, CodecResult, WireDeserialize, WireSerialize};

pub use metadata::MetadataEntry;
pub use restriction::{
    AccountRestriction, AccountRestrictionValues, AccountRestrictionsEntry,
    AddressRestrictionPair, GlobalRestrictionRule, MosaicAddressRestriction,
    MosaicGlobalRestriction, MosaicRestrictionEntry,
};

/// The versioned prefix every state entry starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHeader {
    /// State entry layout version.
    pub version: u16,
}

impl StateHeader {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = 2;

    /// The current layout version.
    pub const CURRENT_VERSION: u16 = 1;

    /// Header at the current version.
    pub fn current() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
        }
    }
}

impl WireSerialize for StateHeader {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u16(self.version);
    }
}

impl WireDeserialize for StateHeader {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            version: reader.read_u16("StateHeader")?,
        })
    }
}

//! # Data Model
//!
//! The vocabulary of the wire format: scalar quantities, enumerations, and
//! the small composites they combine into. Everything here is `Copy`-sized
//! or close to it, immutable after construction, and knows its own exact
//! byte layout.
//!
//! ```text
//! primitives.rs — fixed-width scalar wrappers (heights, amounts, keys, hashes)
//! enums.rs      — open enumerations, flag sets, and closed discriminators
//! mosaic.rs     — the 16-byte (id, amount) composite
//! ```

pub mod enums;
pub mod mosaic;
pub mod primitives;

pub use enums::{
    AccountRestrictionFlags, AliasAction, LinkAction, LockHashAlgorithm, MetadataType,
    MosaicFlags, MosaicRestrictionEntryType, MosaicRestrictionType, MosaicSupplyChangeAction,
    NamespaceRegistrationType, NetworkType, ReceiptType, TransactionType,
};
pub use mosaic::Mosaic;
pub use primitives::{
    Address, Amount, BlockDuration, Deadline, Difficulty, FinalizationEpoch, FinalizationPoint,
    Hash256, Height, Importance, MetadataKey, MosaicId, MosaicNonce, NamespaceId, PublicKey,
    RestrictionKey, Signature, UnresolvedAddress,
};

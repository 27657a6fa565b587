//! Transaction envelopes.
//!
//! One body type per transaction kind, two envelope shapes around it:
//!
//! - [`Transaction`] -- the standalone, signable, fee-carrying envelope
//!   that travels the network on its own.
//! - [`EmbeddedTransaction`] -- the stripped envelope used inside an
//!   aggregate: no signature, no fee, no deadline, because the enclosing
//!   aggregate carries all three.
//!
//! Both envelopes begin with a declared total size. On encode that size is
//! recomputed from the body every time; on decode it bounds the body region
//! and is cross-checked against the bytes actually consumed, so a corrupt
//! size field is caught instead of silently misaligning the stream.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::config::{EMBEDDED_HEADER_SIZE, TRANSACTION_HEADER_SIZE};
use crate::model::{Amount, Deadline, NetworkType, PublicKey, Signature, TransactionType};

use super::aggregate::AggregateBody;
use super::lock::{HashLockBody, SecretLockBody, SecretProofBody};
use super::metadata::AccountMetadataBody;
use super::mosaic::{MosaicDefinitionBody, MosaicSupplyChangeBody};
use super::multisig::{AccountKeyLinkBody, MultisigAccountModificationBody};
use super::namespace::{AddressAliasBody, MosaicAliasBody, NamespaceRegistrationBody};
use super::restriction::{
    AccountAddressRestrictionBody, AccountMosaicRestrictionBody, AccountOperationRestrictionBody,
};
use super::transfer::TransferBody;

/// The payload of a transaction, tagged by [`TransactionType`].
///
/// Exactly one variant is ever populated, the discriminator is implied by
/// the variant, and the two stay consistent by construction. Decoding
/// dispatches on the type tag read from the envelope header; an unknown
/// tag fails with `InvalidDiscriminant` because no parser can make sense
/// of the bytes that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionBody {
    Transfer(TransferBody),
    MosaicDefinition(MosaicDefinitionBody),
    MosaicSupplyChange(MosaicSupplyChangeBody),
    NamespaceRegistration(NamespaceRegistrationBody),
    AddressAlias(AddressAliasBody),
    MosaicAlias(MosaicAliasBody),
    AccountAddressRestriction(AccountAddressRestrictionBody),
    AccountMosaicRestriction(AccountMosaicRestrictionBody),
    AccountOperationRestriction(AccountOperationRestrictionBody),
    MultisigAccountModification(MultisigAccountModificationBody),
    AccountKeyLink(AccountKeyLinkBody),
    AccountMetadata(AccountMetadataBody),
    HashLock(HashLockBody),
    SecretLock(SecretLockBody),
    SecretProof(SecretProofBody),
    AggregateComplete(AggregateBody),
    AggregateBonded(AggregateBody),
}

impl TransactionBody {
    /// The type tag this body serializes under.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Transfer(_) => TransactionType::Transfer,
            Self::MosaicDefinition(_) => TransactionType::MosaicDefinition,
            Self::MosaicSupplyChange(_) => TransactionType::MosaicSupplyChange,
            Self::NamespaceRegistration(_) => TransactionType::NamespaceRegistration,
            Self::AddressAlias(_) => TransactionType::AddressAlias,
            Self::MosaicAlias(_) => TransactionType::MosaicAlias,
            Self::AccountAddressRestriction(_) => TransactionType::AccountAddressRestriction,
            Self::AccountMosaicRestriction(_) => TransactionType::AccountMosaicRestriction,
            Self::AccountOperationRestriction(_) => TransactionType::AccountOperationRestriction,
            Self::MultisigAccountModification(_) => TransactionType::MultisigAccountModification,
            Self::AccountKeyLink(_) => TransactionType::AccountKeyLink,
            Self::AccountMetadata(_) => TransactionType::AccountMetadata,
            Self::HashLock(_) => TransactionType::HashLock,
            Self::SecretLock(_) => TransactionType::SecretLock,
            Self::SecretProof(_) => TransactionType::SecretProof,
            Self::AggregateComplete(_) => TransactionType::AggregateComplete,
            Self::AggregateBonded(_) => TransactionType::AggregateBonded,
        }
    }

    /// The current layout version for this body kind.
    pub fn version(&self) -> u8 {
        match self {
            Self::Transfer(_) => TransferBody::VERSION,
            Self::MosaicDefinition(_) => MosaicDefinitionBody::VERSION,
            Self::MosaicSupplyChange(_) => MosaicSupplyChangeBody::VERSION,
            Self::NamespaceRegistration(_) => NamespaceRegistrationBody::VERSION,
            Self::AddressAlias(_) => AddressAliasBody::VERSION,
            Self::MosaicAlias(_) => MosaicAliasBody::VERSION,
            Self::AccountAddressRestriction(_) => AccountAddressRestrictionBody::VERSION,
            Self::AccountMosaicRestriction(_) => AccountMosaicRestrictionBody::VERSION,
            Self::AccountOperationRestriction(_) => AccountOperationRestrictionBody::VERSION,
            Self::MultisigAccountModification(_) => MultisigAccountModificationBody::VERSION,
            Self::AccountKeyLink(_) => AccountKeyLinkBody::VERSION,
            Self::AccountMetadata(_) => AccountMetadataBody::VERSION,
            Self::HashLock(_) => HashLockBody::VERSION,
            Self::SecretLock(_) => SecretLockBody::VERSION,
            Self::SecretProof(_) => SecretProofBody::VERSION,
            Self::AggregateComplete(_) | Self::AggregateBonded(_) => AggregateBody::VERSION,
        }
    }

    /// Short name of the populated variant, for error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "Transfer",
            Self::MosaicDefinition(_) => "MosaicDefinition",
            Self::MosaicSupplyChange(_) => "MosaicSupplyChange",
            Self::NamespaceRegistration(_) => "NamespaceRegistration",
            Self::AddressAlias(_) => "AddressAlias",
            Self::MosaicAlias(_) => "MosaicAlias",
            Self::AccountAddressRestriction(_) => "AccountAddressRestriction",
            Self::AccountMosaicRestriction(_) => "AccountMosaicRestriction",
            Self::AccountOperationRestriction(_) => "AccountOperationRestriction",
            Self::MultisigAccountModification(_) => "MultisigAccountModification",
            Self::AccountKeyLink(_) => "AccountKeyLink",
            Self::AccountMetadata(_) => "AccountMetadata",
            Self::HashLock(_) => "HashLock",
            Self::SecretLock(_) => "SecretLock",
            Self::SecretProof(_) => "SecretProof",
            Self::AggregateComplete(_) => "AggregateComplete",
            Self::AggregateBonded(_) => "AggregateBonded",
        }
    }

    /// Returns `true` for either aggregate variant.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::AggregateComplete(_) | Self::AggregateBonded(_))
    }

    /// Borrows the transfer body, failing if another variant is active.
    pub fn as_transfer(&self) -> CodecResult<&TransferBody> {
        match self {
            Self::Transfer(body) => Ok(body),
            other => Err(CodecError::InvalidState {
                entity: "TransactionBody",
                expected: "Transfer",
                actual: other.variant_name(),
            }),
        }
    }

    /// Borrows the aggregate body, failing if another variant is active.
    pub fn as_aggregate(&self) -> CodecResult<&AggregateBody> {
        match self {
            Self::AggregateComplete(body) | Self::AggregateBonded(body) => Ok(body),
            other => Err(CodecError::InvalidState {
                entity: "TransactionBody",
                expected: "AggregateComplete or AggregateBonded",
                actual: other.variant_name(),
            }),
        }
    }

    /// Serializes the portion of the body covered by the envelope
    /// signature. Identical to `write_to` except for aggregates, whose
    /// cosignature trailer is excluded so that cosigning after the fact
    /// does not invalidate the initiator's signature.
    pub fn write_signed_to(&self, writer: &mut BinaryWriter) {
        match self {
            Self::AggregateComplete(body) | Self::AggregateBonded(body) => {
                body.write_signed_to(writer)
            }
            other => other.write_to(writer),
        }
    }

    /// Decodes the body matching an already-read type tag.
    pub fn read_body(
        tx_type: TransactionType,
        reader: &mut BinaryReader<'_>,
    ) -> CodecResult<Self> {
        Ok(match tx_type {
            TransactionType::Transfer => Self::Transfer(TransferBody::read_from(reader)?),
            TransactionType::MosaicDefinition => {
                Self::MosaicDefinition(MosaicDefinitionBody::read_from(reader)?)
            }
            TransactionType::MosaicSupplyChange => {
                Self::MosaicSupplyChange(MosaicSupplyChangeBody::read_from(reader)?)
            }
            TransactionType::NamespaceRegistration => {
                Self::NamespaceRegistration(NamespaceRegistrationBody::read_from(reader)?)
            }
            TransactionType::AddressAlias => {
                Self::AddressAlias(AddressAliasBody::read_from(reader)?)
            }
            TransactionType::MosaicAlias => Self::MosaicAlias(MosaicAliasBody::read_from(reader)?),
            TransactionType::AccountAddressRestriction => {
                Self::AccountAddressRestriction(AccountAddressRestrictionBody::read_from(reader)?)
            }
            TransactionType::AccountMosaicRestriction => {
                Self::AccountMosaicRestriction(AccountMosaicRestrictionBody::read_from(reader)?)
            }
            TransactionType::AccountOperationRestriction => Self::AccountOperationRestriction(
                AccountOperationRestrictionBody::read_from(reader)?,
            ),
            TransactionType::MultisigAccountModification => Self::MultisigAccountModification(
                MultisigAccountModificationBody::read_from(reader)?,
            ),
            TransactionType::AccountKeyLink => {
                Self::AccountKeyLink(AccountKeyLinkBody::read_from(reader)?)
            }
            TransactionType::AccountMetadata => {
                Self::AccountMetadata(AccountMetadataBody::read_from(reader)?)
            }
            TransactionType::HashLock => Self::HashLock(HashLockBody::read_from(reader)?),
            TransactionType::SecretLock => Self::SecretLock(SecretLockBody::read_from(reader)?),
            TransactionType::SecretProof => Self::SecretProof(SecretProofBody::read_from(reader)?),
            TransactionType::AggregateComplete => {
                Self::AggregateComplete(AggregateBody::read_from(reader)?)
            }
            TransactionType::AggregateBonded => {
                Self::AggregateBonded(AggregateBody::read_from(reader)?)
            }
        })
    }
}

impl WireSerialize for TransactionBody {
    fn wire_size(&self) -> usize {
        match self {
            Self::Transfer(body) => body.wire_size(),
            Self::MosaicDefinition(body) => body.wire_size(),
            Self::MosaicSupplyChange(body) => body.wire_size(),
            Self::NamespaceRegistration(body) => body.wire_size(),
            Self::AddressAlias(body) => body.wire_size(),
            Self::MosaicAlias(body) => body.wire_size(),
            Self::AccountAddressRestriction(body) => body.wire_size(),
            Self::AccountMosaicRestriction(body) => body.wire_size(),
            Self::AccountOperationRestriction(body) => body.wire_size(),
            Self::MultisigAccountModification(body) => body.wire_size(),
            Self::AccountKeyLink(body) => body.wire_size(),
            Self::AccountMetadata(body) => body.wire_size(),
            Self::HashLock(body) => body.wire_size(),
            Self::SecretLock(body) => body.wire_size(),
            Self::SecretProof(body) => body.wire_size(),
            Self::AggregateComplete(body) | Self::AggregateBonded(body) => body.wire_size(),
        }
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        match self {
            Self::Transfer(body) => body.write_to(writer),
            Self::MosaicDefinition(body) => body.write_to(writer),
            Self::MosaicSupplyChange(body) => body.write_to(writer),
            Self::NamespaceRegistration(body) => body.write_to(writer),
            Self::AddressAlias(body) => body.write_to(writer),
            Self::MosaicAlias(body) => body.write_to(writer),
            Self::AccountAddressRestriction(body) => body.write_to(writer),
            Self::AccountMosaicRestriction(body) => body.write_to(writer),
            Self::AccountOperationRestriction(body) => body.write_to(writer),
            Self::MultisigAccountModification(body) => body.write_to(writer),
            Self::AccountKeyLink(body) => body.write_to(writer),
            Self::AccountMetadata(body) => body.write_to(writer),
            Self::HashLock(body) => body.write_to(writer),
            Self::SecretLock(body) => body.write_to(writer),
            Self::SecretProof(body) => body.write_to(writer),
            Self::AggregateComplete(body) | Self::AggregateBonded(body) => body.write_to(writer),
        }
    }
}

/// A standalone, signable transaction.
///
/// Wire layout: size (u32), reserved (u32), signature (64), signer key
/// (32), reserved (u32), version (u8), network (u8), type (u16), max fee
/// (u64), deadline (u64), body. Header is 128 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Ed25519 signature over the signing payload; all zeros while
    /// unsigned.
    pub signature: Signature,
    /// Public key of the signer; all zeros while unsigned.
    pub signer_public_key: PublicKey,
    /// Body layout version.
    pub version: u8,
    /// Network the transaction is bound to.
    pub network: NetworkType,
    /// Maximum fee the signer is willing to pay.
    pub max_fee: Amount,
    /// Deadline in milliseconds since the network epoch.
    pub deadline: Deadline,
    /// The payload.
    pub body: TransactionBody,
}

impl Transaction {
    /// Converts to the embedded envelope used inside aggregates.
    ///
    /// Drops the signature, fee, and deadline; the aggregate carries
    /// those. Aggregates themselves cannot be embedded.
    pub fn to_embedded(&self) -> CodecResult<EmbeddedTransaction> {
        EmbeddedTransaction::new(
            self.signer_public_key,
            self.version,
            self.network,
            self.body.clone(),
        )
    }
}

impl WireSerialize for Transaction {
    fn wire_size(&self) -> usize {
        TRANSACTION_HEADER_SIZE + self.body.wire_size()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u32(self.wire_size() as u32);
        writer.write_zeros(4); // reserved
        self.signature.write_to(writer);
        self.signer_public_key.write_to(writer);
        writer.write_zeros(4); // reserved
        writer.write_u8(self.version);
        self.network.write_to(writer);
        self.body.transaction_type().write_to(writer);
        self.max_fee.write_to(writer);
        self.deadline.write_to(writer);
        self.body.write_to(writer);
    }
}

impl WireDeserialize for Transaction {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let declared_size = reader.read_u32("Transaction")? as usize;
        reader.skip(4, "Transaction")?; // reserved
        let signature = Signature::read_from(reader)?;
        let signer_public_key = PublicKey::read_from(reader)?;
        reader.skip(4, "Transaction")?; // reserved
        let version = reader.read_u8("Transaction")?;
        let network = NetworkType::read_from(reader)?;
        let tx_type = TransactionType::read_from(reader)?;
        let max_fee = Amount::read_from(reader)?;
        let deadline = Deadline::read_from(reader)?;

        let Some(body_size) = declared_size.checked_sub(TRANSACTION_HEADER_SIZE) else {
            return Err(CodecError::StructuralInconsistency {
                entity: "Transaction",
                field: "size",
                declared: declared_size as u64,
                computed: TRANSACTION_HEADER_SIZE as u64,
            });
        };
        let mut body_reader = reader.sub_reader(body_size, "Transaction")?;
        let body = TransactionBody::read_body(tx_type, &mut body_reader)?;
        if body_reader.has_remaining() {
            return Err(CodecError::StructuralInconsistency {
                entity: "Transaction",
                field: "size",
                declared: declared_size as u64,
                computed: (TRANSACTION_HEADER_SIZE + body_reader.position()) as u64,
            });
        }

        Ok(Self {
            signature,
            signer_public_key,
            version,
            network,
            max_fee,
            deadline,
            body,
        })
    }
}

/// A transaction packaged for inclusion inside an aggregate.
///
/// Wire layout: size (u32), reserved (u32), signer key (32), reserved
/// (u32), version (u8), network (u8), type (u16), body. Header is 48
/// bytes. No signature, fee, or deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedTransaction {
    /// Public key of the inner transaction's signer.
    pub signer_public_key: PublicKey,
    /// Body layout version.
    pub version: u8,
    /// Network the transaction is bound to.
    pub network: NetworkType,
    /// The payload.
    pub body: TransactionBody,
}

impl EmbeddedTransaction {
    /// Packages a body for embedding. Aggregates cannot nest.
    pub fn new(
        signer_public_key: PublicKey,
        version: u8,
        network: NetworkType,
        body: TransactionBody,
    ) -> CodecResult<Self> {
        if body.is_aggregate() {
            return Err(CodecError::InvalidArgument {
                entity: "EmbeddedTransaction",
                field: "body",
                reason: "aggregate transactions cannot be embedded".to_string(),
            });
        }
        Ok(Self {
            signer_public_key,
            version,
            network,
            body,
        })
    }
}

impl WireSerialize for EmbeddedTransaction {
    fn wire_size(&self) -> usize {
        EMBEDDED_HEADER_SIZE + self.body.wire_size()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u32(self.wire_size() as u32);
        writer.write_zeros(4); // reserved
        self.signer_public_key.write_to(writer);
        writer.write_zeros(4); // reserved
        writer.write_u8(self.version);
        self.network.write_to(writer);
        self.body.transaction_type().write_to(writer);
        self.body.write_to(writer);
    }
}

impl WireDeserialize for EmbeddedTransaction {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let declared_size = reader.read_u32("EmbeddedTransaction")? as usize;
        reader.skip(4, "EmbeddedTransaction")?; // reserved
        let signer_public_key = PublicKey::read_from(reader)?;
        reader.skip(4, "EmbeddedTransaction")?; // reserved
        let version = reader.read_u8("EmbeddedTransaction")?;
        let network = NetworkType::read_from(reader)?;
        let tx_type = TransactionType::read_from(reader)?;
        if matches!(
            tx_type,
            TransactionType::AggregateComplete | TransactionType::AggregateBonded
        ) {
            return Err(CodecError::InvalidDiscriminant {
                entity: "EmbeddedTransaction",
                value: tx_type.raw() as u64,
            });
        }

        let Some(body_size) = declared_size.checked_sub(EMBEDDED_HEADER_SIZE) else {
            return Err(CodecError::StructuralInconsistency {
                entity: "EmbeddedTransaction",
                field: "size",
                declared: declared_size as u64,
                computed: EMBEDDED_HEADER_SIZE as u64,
            });
        };
        let mut body_reader = reader.sub_reader(body_size, "EmbeddedTransaction")?;
        let body = TransactionBody::read_body(tx_type, &mut body_reader)?;
        if body_reader.has_remaining() {
            return Err(CodecError::StructuralInconsistency {
                entity: "EmbeddedTransaction",
                field: "size",
                declared: declared_size as u64,
                computed: (EMBEDDED_HEADER_SIZE + body_reader.position()) as u64,
            });
        }

        Ok(Self {
            signer_public_key,
            version,
            network,
            body,
        })
    }
}

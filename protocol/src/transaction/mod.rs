//! # Transaction Module
//!
//! Bodies, envelopes, aggregation, and signing for Meridian transactions.
//! Every state change on the network is expressed as one of the body
//! types here, wrapped in either the standalone or the embedded envelope.
//!
//! ## Architecture
//!
//! ```text
//! envelope.rs    — Transaction / EmbeddedTransaction envelopes, TransactionBody union
//! transfer.rs    — value transfer body
//! mosaic.rs      — mosaic definition and supply change bodies
//! namespace.rs   — namespace registration (root/child) and alias bodies
//! restriction.rs — account restriction bodies (address / mosaic / operation)
//! multisig.rs    — multisig modification and key link bodies
//! metadata.rs    — account metadata body
//! lock.rs        — hash lock, secret lock, secret proof bodies
//! aggregate.rs   — aggregate body, cosignatures, transactions-hash
//! builder.rs     — fluent TransactionBuilder for unsigned envelopes
//! signing.rs     — Ed25519 signing, verification, transaction hashing
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** -- construct a body, wrap it via [`TransactionBuilder`].
//! 2. **Sign** -- [`sign_transaction`] with the sender's keypair.
//! 3. **Serialize** -- `to_wire_bytes()` for announcement.
//! 4. **Embed** -- [`Transaction::to_embedded`] for aggregate inclusion;
//!    [`AggregateBody::new`] computes the binding Merkle root.

pub mod aggregate;
pub mod builder;
pub mod envelope;
pub mod lock;
pub mod metadata;
pub mod mosaic;
pub mod multisig;
pub mod namespace;
pub mod restriction;
pub mod signing;
pub mod transfer;

pub use aggregate::{AggregateBody, Cosignature};
pub use builder::TransactionBuilder;
pub use envelope::{EmbeddedTransaction, Transaction, TransactionBody};
pub use lock::{HashLockBody, SecretLockBody, SecretProofBody};
pub use metadata::AccountMetadataBody;
pub use mosaic::{MosaicDefinitionBody, MosaicSupplyChangeBody};
pub use multisig::{AccountKeyLinkBody, MultisigAccountModificationBody};
pub use namespace::{AddressAliasBody, MosaicAliasBody, NamespaceRegistrationBody};
pub use restriction::{
    AccountAddressRestrictionBody, AccountMosaicRestrictionBody, AccountOperationRestrictionBody,
};
pub use signing::{
    cosign, sign_transaction, signing_payload, transaction_hash, verify_transaction_signature,
};
pub use transfer::TransferBody;

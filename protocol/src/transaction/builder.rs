//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] enforces a disciplined construction flow:
//! pick a network, attach a body, set fee and deadline, call `.build()`,
//! and get back an unsigned [`Transaction`] with a zeroed signature.
//!
//! The builder does not sign -- that happens in [`super::signing`]. This
//! separation keeps construction testable without key material.

use tracing::trace;

use crate::codec::{CodecError, CodecResult};
use crate::model::{Amount, Deadline, NetworkType, PublicKey, Signature};

use super::envelope::{Transaction, TransactionBody};

/// Fluent builder for unsigned [`Transaction`] envelopes.
///
/// # Usage
///
/// ```
/// use meridian_protocol::model::{Amount, Deadline, NetworkType, UnresolvedAddress};
/// use meridian_protocol::transaction::{TransactionBuilder, TransactionBody, TransferBody};
///
/// let body = TransferBody::new(UnresolvedAddress([0x11; 24]), vec![], b"hello".to_vec()).unwrap();
/// let tx = TransactionBuilder::new(NetworkType::TESTNET)
///     .body(TransactionBody::Transfer(body))
///     .max_fee(Amount(1_000))
///     .deadline(Deadline(1_700_000_000_000))
///     .build()
///     .unwrap();
/// assert!(tx.signature.is_zero());
/// ```
///
/// The envelope version defaults to the body's layout version; override it
/// only when testing version upgrades.
pub struct TransactionBuilder {
    network: NetworkType,
    version: Option<u8>,
    max_fee: Amount,
    deadline: Deadline,
    body: Option<TransactionBody>,
}

impl TransactionBuilder {
    /// Starts a builder for the given network.
    ///
    /// Defaults: fee 0, deadline 0, version taken from the body at build
    /// time. A body is required; `build()` fails without one.
    pub fn new(network: NetworkType) -> Self {
        Self {
            network,
            version: None,
            max_fee: Amount(0),
            deadline: Deadline(0),
            body: None,
        }
    }

    /// Overrides the envelope version. Only needed for testing upgrades.
    pub fn version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the maximum fee the signer is willing to pay.
    pub fn max_fee(mut self, max_fee: Amount) -> Self {
        self.max_fee = max_fee;
        self
    }

    /// Sets the transaction deadline.
    pub fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Attaches the transaction payload.
    pub fn body(mut self, body: TransactionBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    ///
    /// The signature and signer key are zeroed; [`super::signing`] fills
    /// them in. Fails if no body was attached.
    pub fn build(self) -> CodecResult<Transaction> {
        let body = self.body.ok_or(CodecError::InvalidArgument {
            entity: "Transaction",
            field: "body",
            reason: "a transaction body is required".to_string(),
        })?;
        let version = self.version.unwrap_or_else(|| body.version());
        trace!(tx_type = ?body.transaction_type(), version, "built unsigned transaction");
        Ok(Transaction {
            signature: Signature::zero(),
            signer_public_key: PublicKey::zero(),
            version,
            network: self.network,
            max_fee: self.max_fee,
            deadline: self.deadline,
            body,
        })
    }
}

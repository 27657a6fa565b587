//! Transaction signing with Ed25519 keypairs.
//!
//! Signing is a separate step from building because the keypair may not be
//! available at construction time (hardware wallet, remote signer). The
//! signed region is everything after the mutable prefix -- from the
//! version byte to the end of the body -- prefixed with the network's
//! generation hash so a testnet signature can never be replayed on
//! mainnet.

use tracing::debug;

use crate::codec::{BinaryWriter, WireSerialize};
use crate::crypto::{hash256_multi, verify_signature, Keypair};
use crate::model::Hash256;

use super::aggregate::Cosignature;
use super::envelope::Transaction;

/// Serializes the signed region of a transaction: version, network, type,
/// max fee, deadline, body. The size field, reserved fields, signature,
/// and signer key are excluded -- the first two are derived, the last two
/// are what signing fills in. For aggregates the cosignature trailer is
/// excluded too, so cosignatures can be attached to an already-signed
/// envelope.
fn write_signed_region(tx: &Transaction, writer: &mut BinaryWriter) {
    writer.write_u8(tx.version);
    tx.network.write_to(writer);
    tx.body.transaction_type().write_to(writer);
    tx.max_fee.write_to(writer);
    tx.deadline.write_to(writer);
    tx.body.write_signed_to(writer);
}

/// The exact bytes a signature covers: `generation_hash ‖ signed region`.
pub fn signing_payload(tx: &Transaction, generation_hash: &Hash256) -> Vec<u8> {
    let mut writer = BinaryWriter::with_capacity(Hash256::WIRE_SIZE + 20 + tx.body.wire_size());
    writer.write_bytes(generation_hash.as_bytes());
    write_signed_region(tx, &mut writer);
    writer.into_bytes()
}

/// Signs a transaction in place, filling in its signature and signer key.
///
/// Returns a reference to the (now signed) transaction for chaining.
pub fn sign_transaction<'a>(
    tx: &'a mut Transaction,
    keypair: &Keypair,
    generation_hash: &Hash256,
) -> &'a Transaction {
    let payload = signing_payload(tx, generation_hash);
    tx.signature = keypair.sign(&payload);
    tx.signer_public_key = keypair.public_key();
    debug!(
        tx_type = ?tx.body.transaction_type(),
        signer = %tx.signer_public_key,
        "signed transaction"
    );
    tx
}

/// Verifies a transaction's signature against its embedded signer key.
pub fn verify_transaction_signature(tx: &Transaction, generation_hash: &Hash256) -> bool {
    verify_signature(
        &tx.signer_public_key,
        &signing_payload(tx, generation_hash),
        &tx.signature,
    )
}

/// Computes the transaction hash announced to and indexed by the network:
/// `H(signature ‖ signer ‖ generation_hash ‖ signed region)`.
pub fn transaction_hash(tx: &Transaction, generation_hash: &Hash256) -> Hash256 {
    let mut region = BinaryWriter::with_capacity(20 + tx.body.wire_size());
    write_signed_region(tx, &mut region);
    hash256_multi(&[
        tx.signature.as_bytes(),
        tx.signer_public_key.as_bytes(),
        generation_hash.as_bytes(),
        region.as_bytes(),
    ])
}

/// Cosigns an aggregate: signs its transaction hash directly.
pub fn cosign(keypair: &Keypair, aggregate_hash: &Hash256) -> Cosignature {
    let cosignature = Cosignature {
        version: 0,
        signer_public_key: keypair.public_key(),
        signature: keypair.sign(aggregate_hash.as_bytes()),
    };
    debug!(signer = %cosignature.signer_public_key, "cosigned aggregate");
    cosignature
}

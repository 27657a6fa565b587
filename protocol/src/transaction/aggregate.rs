//! Aggregate transaction body and cosignatures.
//!
//! An aggregate packs a heterogeneous sequence of embedded transactions
//! into one atomically-executed unit, binds their exact content and order
//! with a Merkle root, and carries any number of trailing cosignatures.
//!
//! Two "remaining" collections live here, decoded differently on purpose:
//! the embedded transactions are bounded by the explicit payload size read
//! from the stream, while the cosignatures consume every byte left in the
//! enclosing envelope. Neither has a count prefix and neither needs one.

use serde::{Deserialize, Serialize};

use crate::codec::{
    padded_size, padding_size, BinaryReader, BinaryWriter, CodecResult, WireDeserialize,
    WireSerialize,
};
use crate::config::{AGGREGATE_PAYLOAD_ALIGNMENT, COSIGNATURE_SIZE};
use crate::crypto::{hash256, merkle_root};
use crate::model::{Hash256, PublicKey, Signature};

use super::envelope::EmbeddedTransaction;

/// A cosignatory's signature over an aggregate's transaction hash.
///
/// Wire layout: version (u64), signer key (32), signature (64) -- 104
/// bytes, fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosignature {
    /// Cosignature format version. Currently always 0.
    pub version: u64,
    /// The cosignatory's public key.
    pub signer_public_key: PublicKey,
    /// Signature over the aggregate's transaction hash.
    pub signature: Signature,
}

impl Cosignature {
    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = COSIGNATURE_SIZE;
}

impl WireSerialize for Cosignature {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u64(self.version);
        self.signer_public_key.write_to(writer);
        self.signature.write_to(writer);
    }
}

impl WireDeserialize for Cosignature {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let version = reader.read_u64("Cosignature")?;
        let signer_public_key = PublicKey::read_from(reader)?;
        let signature = Signature::read_from(reader)?;
        Ok(Self {
            version,
            signer_public_key,
            signature,
        })
    }
}

/// Body shared by aggregate-complete and aggregate-bonded transactions.
///
/// Wire layout: transactions hash (32), payload size (u32), reserved
/// (u32), embedded transactions (each zero-padded to an 8-byte boundary,
/// total equal to payload size), cosignatures (all remaining bytes).
///
/// The payload size is never stored: it is recomputed from the transaction
/// list on every `wire_size`/`write_to` call, so the declared and actual
/// payload cannot drift apart on the encode path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBody {
    /// Merkle root binding the inner transactions (content and order).
    pub transactions_hash: Hash256,
    /// The inner transactions, in execution order.
    pub transactions: Vec<EmbeddedTransaction>,
    /// Cosignatures accumulated for this aggregate.
    pub cosignatures: Vec<Cosignature>,
}

impl AggregateBody {
    /// Body layout version.
    pub const VERSION: u8 = 1;

    const FIXED_SIZE: usize = Hash256::WIRE_SIZE + 4 + 4;

    /// Assembles an aggregate body, computing the transactions hash from
    /// the inner transactions.
    pub fn new(transactions: Vec<EmbeddedTransaction>, cosignatures: Vec<Cosignature>) -> Self {
        let transactions_hash = Self::compute_transactions_hash(&transactions);
        Self {
            transactions_hash,
            transactions,
            cosignatures,
        }
    }

    /// Total padded byte length of the embedded transaction sequence.
    pub fn payload_size(&self) -> usize {
        self.transactions
            .iter()
            .map(|tx| padded_size(tx.wire_size(), AGGREGATE_PAYLOAD_ALIGNMENT))
            .sum()
    }

    /// Serializes everything except the cosignature trailer.
    ///
    /// This is the portion the initiator's signature covers: cosigners
    /// append their records after the fact, and doing so must not
    /// invalidate the signature or change the announced hash.
    pub fn write_signed_to(&self, writer: &mut BinaryWriter) {
        self.transactions_hash.write_to(writer);
        writer.write_u32(self.payload_size() as u32);
        writer.write_zeros(4); // reserved
        for tx in &self.transactions {
            let size = tx.wire_size();
            tx.write_to(writer);
            writer.write_zeros(padding_size(size, AGGREGATE_PAYLOAD_ALIGNMENT));
        }
    }

    /// Merkle root over the inner transactions.
    ///
    /// Each transaction's embedded-envelope serialization is zero-padded
    /// to the next 8-byte boundary and hashed into a leaf; the ordered
    /// leaves reduce pairwise (odd leaf duplicated with itself) until one
    /// root remains. An empty list yields the all-zero root without a
    /// single hash call.
    pub fn compute_transactions_hash(transactions: &[EmbeddedTransaction]) -> Hash256 {
        let leaves: Vec<Hash256> = transactions
            .iter()
            .map(|tx| {
                let mut bytes = tx.to_wire_bytes();
                bytes.resize(padded_size(bytes.len(), AGGREGATE_PAYLOAD_ALIGNMENT), 0);
                hash256(&bytes)
            })
            .collect();
        merkle_root(&leaves)
    }
}

impl WireSerialize for AggregateBody {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + self.payload_size() + self.cosignatures.len() * Cosignature::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.write_signed_to(writer);
        for cosignature in &self.cosignatures {
            cosignature.write_to(writer);
        }
    }
}

impl WireDeserialize for AggregateBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let transactions_hash = Hash256::read_from(reader)?;
        let payload_size = reader.read_u32("AggregateBody")? as usize;
        reader.skip(4, "AggregateBody")?; // reserved

        let mut payload = reader.sub_reader(payload_size, "AggregateBody")?;
        let mut transactions = Vec::new();
        while payload.has_remaining() {
            let before = payload.position();
            let tx = EmbeddedTransaction::read_from(&mut payload)?;
            let consumed = payload.position() - before;
            payload.skip(
                padding_size(consumed, AGGREGATE_PAYLOAD_ALIGNMENT),
                "AggregateBody",
            )?;
            transactions.push(tx);
        }

        // Cosignatures fill whatever is left of the enclosing envelope.
        // A partial trailing record is an error, not silently dropped.
        let mut cosignatures = Vec::new();
        while reader.has_remaining() {
            cosignatures.push(Cosignature::read_from(reader)?);
        }

        Ok(Self {
            transactions_hash,
            transactions,
            cosignatures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NetworkType, TransactionType, UnresolvedAddress};
    use crate::transaction::envelope::TransactionBody;
    use crate::transaction::transfer::TransferBody;

    /// A transfer whose embedded envelope serializes to exactly
    /// `48 + 32 + message_len` bytes.
    fn embedded_transfer(message_len: usize) -> EmbeddedTransaction {
        EmbeddedTransaction::new(
            PublicKey([0x55; 32]),
            1,
            NetworkType::TESTNET,
            TransactionBody::Transfer(
                TransferBody::new(
                    UnresolvedAddress([0x66; 24]),
                    vec![],
                    vec![0xAB; message_len],
                )
                .unwrap(),
            ),
        )
        .unwrap()
    }

    fn cosignature(byte: u8) -> Cosignature {
        Cosignature {
            version: 0,
            signer_public_key: PublicKey([byte; 32]),
            signature: Signature([byte; 64]),
        }
    }

    #[test]
    fn cosignature_roundtrip() {
        let cosig = cosignature(0x42);
        let bytes = cosig.to_wire_bytes();
        assert_eq!(bytes.len(), 104);
        assert_eq!(Cosignature::from_wire_bytes(&bytes).unwrap(), cosig);
    }

    #[test]
    fn empty_aggregate_has_zero_root() {
        // No inner transactions: all-zero root, no hashing involved.
        let body = AggregateBody::new(vec![], vec![]);
        assert_eq!(body.transactions_hash, Hash256::zero());
        assert_eq!(body.payload_size(), 0);
        assert_eq!(body.wire_size(), 40);
    }

    #[test]
    fn merkle_scenario_90_104_120() {
        // Embedded sizes 90, 104, 120: only the first needs padding
        // (90 -> 96), and the three leaves reduce to two (pair 0+1 hashed,
        // leaf 2 duplicated with itself), then to one root.
        let txs = vec![
            embedded_transfer(10),
            embedded_transfer(24),
            embedded_transfer(40),
        ];
        assert_eq!(txs[0].wire_size(), 90);
        assert_eq!(txs[1].wire_size(), 104);
        assert_eq!(txs[2].wire_size(), 120);

        let leaves: Vec<Hash256> = txs
            .iter()
            .map(|tx| {
                let mut bytes = tx.to_wire_bytes();
                bytes.resize(padded_size(bytes.len(), 8), 0);
                hash256(&bytes)
            })
            .collect();
        let pair = crate::crypto::hash256_multi(&[leaves[0].as_bytes(), leaves[1].as_bytes()]);
        let lone = crate::crypto::hash256_multi(&[leaves[2].as_bytes(), leaves[2].as_bytes()]);
        let expected = crate::crypto::hash256_multi(&[pair.as_bytes(), lone.as_bytes()]);

        assert_eq!(AggregateBody::compute_transactions_hash(&txs), expected);
        // Recomputing from the same list is deterministic.
        assert_eq!(
            AggregateBody::compute_transactions_hash(&txs),
            AggregateBody::compute_transactions_hash(&txs)
        );
    }

    #[test]
    fn reordering_inner_transactions_changes_root() {
        let a = embedded_transfer(10);
        let b = embedded_transfer(24);
        let c = embedded_transfer(40);
        let forward =
            AggregateBody::compute_transactions_hash(&[a.clone(), b.clone(), c.clone()]);
        let reversed = AggregateBody::compute_transactions_hash(&[c, b, a]);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn roundtrip_with_cosignatures() {
        let body = AggregateBody::new(
            vec![embedded_transfer(10), embedded_transfer(24)],
            vec![cosignature(1), cosignature(2)],
        );
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), body.wire_size());
        let decoded = AggregateBody::from_wire_bytes(&bytes).unwrap();
        assert_eq!(decoded, body);
        assert_eq!(decoded.transactions.len(), 2);
        assert_eq!(decoded.cosignatures.len(), 2);
    }

    #[test]
    fn payload_size_is_recomputed_from_the_list() {
        // Mutating the transaction list after construction must be
        // reflected in the serialized payload size: nothing is cached.
        let mut body = AggregateBody::new(vec![embedded_transfer(10)], vec![]);
        let before = body.payload_size();
        body.transactions.push(embedded_transfer(24));
        assert_eq!(before, 96);
        assert_eq!(body.payload_size(), 96 + 104);

        let bytes = body.to_wire_bytes();
        let declared = u32::from_le_bytes([bytes[32], bytes[33], bytes[34], bytes[35]]);
        assert_eq!(declared as usize, 96 + 104);
    }

    #[test]
    fn inter_transaction_padding_is_zero() {
        let body = AggregateBody::new(vec![embedded_transfer(10)], vec![]);
        let bytes = body.to_wire_bytes();
        // The 90-byte transaction sits at offset 40; bytes 130..136 are pad.
        assert_eq!(&bytes[130..136], &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn stored_hash_is_decoded_verbatim() {
        // The hash field is bound by the outer signature, so decode reads
        // it as-is instead of recomputing.
        let mut body = AggregateBody::new(vec![embedded_transfer(10)], vec![]);
        body.transactions_hash = Hash256([0xEE; 32]);
        let decoded = AggregateBody::from_wire_bytes(&body.to_wire_bytes()).unwrap();
        assert_eq!(decoded.transactions_hash, Hash256([0xEE; 32]));
    }

    #[test]
    fn partial_trailing_cosignature_is_an_error() {
        let body = AggregateBody::new(vec![], vec![cosignature(7)]);
        let bytes = body.to_wire_bytes();
        // Chop mid-record: the trailer must not be silently dropped.
        let err = AggregateBody::from_wire_bytes(&bytes[..bytes.len() - 10]).unwrap_err();
        assert!(matches!(err, crate::codec::CodecError::StreamTruncated { .. }));
    }

    #[test]
    fn truncated_payload_region_fails() {
        let body = AggregateBody::new(vec![embedded_transfer(10)], vec![]);
        let bytes = body.to_wire_bytes();
        // Remove the final padding bytes: the declared payload size now
        // exceeds what the stream holds.
        assert!(AggregateBody::from_wire_bytes(&bytes[..bytes.len() - 4]).is_err());
    }

    #[test]
    fn embedded_aggregate_tag_inside_payload_is_rejected() {
        let body = AggregateBody::new(vec![embedded_transfer(10)], vec![]);
        let mut bytes = body.to_wire_bytes();
        // Overwrite the inner transaction's type tag (offset 40 + 46) with
        // the aggregate-complete tag.
        let tag = TransactionType::AggregateComplete.raw().to_le_bytes();
        bytes[86] = tag[0];
        bytes[87] = tag[1];
        assert!(matches!(
            AggregateBody::from_wire_bytes(&bytes).unwrap_err(),
            crate::codec::CodecError::InvalidDiscriminant { entity: "EmbeddedTransaction", .. }
        ));
    }
}

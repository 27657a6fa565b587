//! Hash lock, secret lock, and secret proof bodies.
//!
//! The lock family escrows funds against a future event: a hash lock
//! backs a pending bonded aggregate, a secret lock releases to whoever
//! presents the preimage, and a secret proof presents it.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};
use crate::model::{BlockDuration, Hash256, LockHashAlgorithm, Mosaic, UnresolvedAddress};

/// Body of a hash lock transaction.
///
/// Wire layout: mosaic (16), duration (u64), hash (32) -- 56 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLockBody {
    /// The locked deposit.
    pub mosaic: Mosaic,
    /// How many blocks the lock lives.
    pub duration: BlockDuration,
    /// Hash of the aggregate bonded transaction the deposit backs.
    pub hash: Hash256,
}

impl HashLockBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize =
        Mosaic::WIRE_SIZE + BlockDuration::WIRE_SIZE + Hash256::WIRE_SIZE;
}

impl WireSerialize for HashLockBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.mosaic.write_to(writer);
        self.duration.write_to(writer);
        self.hash.write_to(writer);
    }
}

impl WireDeserialize for HashLockBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let mosaic = Mosaic::read_from(reader)?;
        let duration = BlockDuration::read_from(reader)?;
        let hash = Hash256::read_from(reader)?;
        Ok(Self {
            mosaic,
            duration,
            hash,
        })
    }
}

/// Body of a secret lock transaction.
///
/// Wire layout: recipient (24), secret (32), mosaic (16), duration (u64),
/// hash algorithm (u8) -- 81 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretLockBody {
    /// Who receives the funds once the proof appears.
    pub recipient_address: UnresolvedAddress,
    /// Hash of the secret the proof must match.
    pub secret: Hash256,
    /// The locked funds.
    pub mosaic: Mosaic,
    /// How many blocks the lock lives before refunding.
    pub duration: BlockDuration,
    /// Which hash algorithm the secret commits with.
    pub hash_algorithm: LockHashAlgorithm,
}

impl SecretLockBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    /// Declared byte width on the wire.
    pub const WIRE_SIZE: usize = UnresolvedAddress::WIRE_SIZE
        + Hash256::WIRE_SIZE
        + Mosaic::WIRE_SIZE
        + BlockDuration::WIRE_SIZE
        + LockHashAlgorithm::WIRE_SIZE;
}

impl WireSerialize for SecretLockBody {
    fn wire_size(&self) -> usize {
        Self::WIRE_SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.recipient_address.write_to(writer);
        self.secret.write_to(writer);
        self.mosaic.write_to(writer);
        self.duration.write_to(writer);
        self.hash_algorithm.write_to(writer);
    }
}

impl WireDeserialize for SecretLockBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let recipient_address = UnresolvedAddress::read_from(reader)?;
        let secret = Hash256::read_from(reader)?;
        let mosaic = Mosaic::read_from(reader)?;
        let duration = BlockDuration::read_from(reader)?;
        let hash_algorithm = LockHashAlgorithm::read_from(reader)?;
        Ok(Self {
            recipient_address,
            secret,
            mosaic,
            duration,
            hash_algorithm,
        })
    }
}

/// Body of a secret proof transaction.
///
/// Wire layout: recipient (24), secret (32), proof size (u16), hash
/// algorithm (u8), proof bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretProofBody {
    /// Recipient of the matching secret lock.
    pub recipient_address: UnresolvedAddress,
    /// The committed hash the proof must preimage.
    pub secret: Hash256,
    /// Which hash algorithm the secret commits with.
    pub hash_algorithm: LockHashAlgorithm,
    /// The preimage bytes.
    pub proof: Vec<u8>,
}

impl SecretProofBody {
    /// Transaction version this body layout belongs to.
    pub const VERSION: u8 = 1;

    const FIXED_SIZE: usize =
        UnresolvedAddress::WIRE_SIZE + Hash256::WIRE_SIZE + 2 + LockHashAlgorithm::WIRE_SIZE;

    /// Builds a proof body, checking the proof fits its u16 size prefix.
    pub fn new(
        recipient_address: UnresolvedAddress,
        secret: Hash256,
        hash_algorithm: LockHashAlgorithm,
        proof: Vec<u8>,
    ) -> CodecResult<Self> {
        if proof.len() > u16::MAX as usize {
            return Err(CodecError::InvalidArgument {
                entity: "SecretProofBody",
                field: "proof",
                reason: format!(
                    "{} bytes exceeds the u16 size prefix maximum of {}",
                    proof.len(),
                    u16::MAX
                ),
            });
        }
        Ok(Self {
            recipient_address,
            secret,
            hash_algorithm,
            proof,
        })
    }
}

impl WireSerialize for SecretProofBody {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + self.proof.len()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.recipient_address.write_to(writer);
        self.secret.write_to(writer);
        writer.write_u16(self.proof.len() as u16);
        self.hash_algorithm.write_to(writer);
        writer.write_bytes(&self.proof);
    }
}

impl WireDeserialize for SecretProofBody {
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
        let recipient_address = UnresolvedAddress::read_from(reader)?;
        let secret = Hash256::read_from(reader)?;
        let proof_size = reader.read_u16("SecretProofBody")? as usize;
        let hash_algorithm = LockHashAlgorithm::read_from(reader)?;
        let proof = reader.read_vec(proof_size, "SecretProofBody")?;
        Ok(Self {
            recipient_address,
            secret,
            hash_algorithm,
            proof,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash256;
    use crate::model::{Amount, MosaicId};

    #[test]
    fn hash_lock_roundtrip() {
        let body = HashLockBody {
            mosaic: Mosaic::new(MosaicId(0x6BED_913F), Amount(10_000_000)),
            duration: BlockDuration(480),
            hash: hash256(b"pending aggregate"),
        };
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 56);
        assert_eq!(HashLockBody::from_wire_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn secret_lock_roundtrip() {
        let body = SecretLockBody {
            recipient_address: UnresolvedAddress([0x09; 24]),
            secret: hash256(b"the secret"),
            mosaic: Mosaic::new(MosaicId(7), Amount(500)),
            duration: BlockDuration(96),
            hash_algorithm: LockHashAlgorithm::BLAKE3,
        };
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), 81);
        assert_eq!(SecretLockBody::from_wire_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn secret_proof_roundtrip() {
        let proof = b"the secret".to_vec();
        let body = SecretProofBody::new(
            UnresolvedAddress([0x09; 24]),
            hash256(&proof),
            LockHashAlgorithm::BLAKE3,
            proof,
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert_eq!(bytes.len(), body.wire_size());
        assert_eq!(SecretProofBody::from_wire_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn proof_size_prefix_precedes_algorithm() {
        let body = SecretProofBody::new(
            UnresolvedAddress([0; 24]),
            Hash256::zero(),
            LockHashAlgorithm::SHA256,
            vec![0xAB; 4],
        )
        .unwrap();
        let bytes = body.to_wire_bytes();
        assert_eq!(u16::from_le_bytes([bytes[56], bytes[57]]), 4);
        assert_eq!(bytes[58], 1); // SHA256 tag
    }

    #[test]
    fn empty_proof_is_legal() {
        // Structurally legal; whether the chain accepts it is not the
        // codec's call.
        let body = SecretProofBody::new(
            UnresolvedAddress([0; 24]),
            Hash256::zero(),
            LockHashAlgorithm::BLAKE3,
            vec![],
        )
        .unwrap();
        assert_eq!(body.wire_size(), 59);
        let decoded = SecretProofBody::from_wire_bytes(&body.to_wire_bytes()).unwrap();
        assert!(decoded.proof.is_empty());
    }
}

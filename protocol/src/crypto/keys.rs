//! # Key Management
//!
//! Ed25519 keypair generation and signing for Meridian accounts.
//!
//! Every signer on the network is an Ed25519 keypair. This module wraps
//! `ed25519-dalek` so the rest of the crate only ever sees the wire types
//! [`PublicKey`] and [`Signature`].
//!
//! ## Why Ed25519?
//!
//! - Deterministic signatures (no k-value footguns like ECDSA).
//! - 128-bit security level in 32+32 bytes. Compact and sufficient.
//! - Fast verification, which matters when a block carries thousands of
//!   signatures.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (thanks, ed25519-dalek).
//! - Key generation uses the OS RNG (`OsRng`).
//! - Key bytes are never logged and never appear in `Debug` output.

use std::fmt;

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH,
};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::model::{PublicKey, Signature};

/// Errors that can occur during key operations.
///
/// Intentionally vague about *why* something failed -- leaking details
/// about key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or not a valid scalar")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

/// An Ed25519 keypair identifying one Meridian account.
///
/// Signing is deterministic: the same (key, message) pair always produces
/// the same signature, which is what makes transaction signatures
/// reproducible in tests without fixing an RNG.
///
/// `Keypair` deliberately does not implement `Serialize`/`Deserialize`.
/// Exporting a private key should be a conscious act, not a side effect of
/// serializing a struct that happens to contain one.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generates a fresh keypair from the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the 32-byte secret key *is* the seed. Useful for deriving
    /// keypairs from KDF output or recovered secrets. A weak seed gives a
    /// weak key; the caller is responsible for entropy.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstructs a keypair from a hex-encoded secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let arr: [u8; SECRET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&arr))
    }

    /// The account's public key, as the wire type.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Signs a message, returning the 64-byte wire signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing_key.sign(message).to_bytes())
    }

    /// Verifies a signature against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        verify_signature(&self.public_key(), message, signature)
    }

    /// Exports the raw 32-byte secret key material.
    ///
    /// Handle with care: this is the only secret standing between an
    /// attacker and the account.
    pub fn secret_key_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material, not even partially.
        write!(f, "Keypair(pub={})", self.public_key().to_hex())
    }
}

/// Verifies an Ed25519 signature against a wire public key.
///
/// Returns a plain boolean: callers want a yes/no answer, and the specific
/// failure mode (bad point, bad length, bad signature) is never actionable
/// for them.
pub fn verify_signature(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key.as_bytes()) else {
        return false;
    };
    let dalek_sig = DalekSignature::from_bytes(signature.as_bytes());
    verifying_key.verify(message, &dalek_sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_verify_roundtrip() {
        let keypair = Keypair::generate();
        let message = b"transfer 100 to the treasury";
        let signature = keypair.sign(message);
        assert!(keypair.verify(message, &signature));
    }

    #[test]
    fn wrong_message_fails_verification() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"correct message");
        assert!(!keypair.verify(b"wrong message", &signature));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let kp1 = Keypair::generate();
        let kp2 = Keypair::generate();
        let signature = kp1.sign(b"message");
        assert!(!kp2.verify(b"message", &signature));
    }

    #[test]
    fn deterministic_from_seed() {
        let seed = [42u8; 32];
        assert_eq!(
            Keypair::from_seed(&seed).public_key(),
            Keypair::from_seed(&seed).public_key()
        );
    }

    #[test]
    fn deterministic_signatures() {
        // Ed25519: same key + same message = same signature.
        let keypair = Keypair::generate();
        let message = b"determinism is underrated";
        assert_eq!(keypair.sign(message), keypair.sign(message));
    }

    #[test]
    fn hex_roundtrip() {
        let keypair = Keypair::generate();
        let restored = Keypair::from_hex(&hex::encode(keypair.secret_key_bytes())).unwrap();
        assert_eq!(keypair.public_key(), restored.public_key());
    }

    #[test]
    fn invalid_hex_rejected() {
        assert!(Keypair::from_hex("deadbeef").is_err());
        assert!(Keypair::from_hex("not-hex-at-all").is_err());
    }

    #[test]
    fn verify_rejects_zero_signature() {
        let keypair = Keypair::generate();
        assert!(!verify_signature(
            &keypair.public_key(),
            b"message",
            &Signature::zero()
        ));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let keypair = Keypair::generate();
        let debug_str = format!("{:?}", keypair);
        assert!(debug_str.starts_with("Keypair(pub="));
        assert!(!debug_str.contains("signing_key"));
    }

    #[test]
    fn two_generated_keypairs_differ() {
        assert_ne!(
            Keypair::generate().public_key(),
            Keypair::generate().public_key()
        );
    }
}

//! # Cryptographic Collaborators
//!
//! The two primitives the wire format leans on, wrapped thinly and
//! type-safely: Ed25519 signing and BLAKE3 hashing. The codec treats both
//! as black boxes -- `sign(bytes) -> signature`, `hash(bytes) -> digest` --
//! and this module is where those boxes live.
//!
//! We deliberately chose boring, well-audited cryptography and we do not
//! roll our own. If you are tempted to optimize these functions, go read
//! about timing attacks and come back when you've lost the urge.

pub mod hash;
pub mod keys;

pub use hash::{hash256, hash256_multi, merkle_root};
pub use keys::{verify_signature, KeyError, Keypair};

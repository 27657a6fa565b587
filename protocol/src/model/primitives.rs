//! Scalar wire types.
//!
//! Every fixed-width quantity on the wire gets its own newtype: heights are
//! not amounts, amounts are not durations, and the compiler enforces it.
//! Each wrapper knows exactly one thing beyond its value -- its declared
//! byte width -- and reads/writes itself in little-endian order.
//!
//! The wrappers are deliberately boring and `Copy`. Two `macro_rules!`
//! tables generate them, one for integer-backed quantities and one for
//! fixed-length byte blocks, so the declared width lives in exactly one
//! place per type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{
    BinaryReader, BinaryWriter, CodecError, CodecResult, WireDeserialize, WireSerialize,
};

macro_rules! uint_wire_type {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $width:expr, $read_fn:ident, $write_fn:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            /// Declared byte width on the wire.
            pub const WIRE_SIZE: usize = $width;

            /// Wraps a raw value.
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl WireSerialize for $name {
            fn wire_size(&self) -> usize {
                $width
            }

            fn write_to(&self, writer: &mut BinaryWriter) {
                writer.$write_fn(self.0);
            }
        }

        impl WireDeserialize for $name {
            fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
                Ok(Self(reader.$read_fn(stringify!($name))?))
            }
        }
    };
}

uint_wire_type!(
    /// A block height.
    Height, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// A quantity of some mosaic, in its smallest indivisible unit.
    /// No floating point anywhere near balances.
    Amount, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// A duration measured in blocks. Zero means "unlimited" for
    /// artifacts that support it (root namespaces, mosaic lifetimes).
    BlockDuration, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// Transaction deadline, in milliseconds since the network epoch.
    /// Epoch arithmetic is the embedding application's business; the wire
    /// format only carries the number.
    Deadline, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// Account importance score.
    Importance, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// Block generation difficulty.
    Difficulty, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// A mosaic identifier, derived from the owner and a nonce.
    MosaicId, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// A namespace identifier, derived from the parent id and the name.
    NamespaceId, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// Key of a single mosaic restriction rule.
    RestrictionKey, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// Scoped metadata key chosen by the metadata author.
    MetadataKey, u64, 8, read_u64, write_u64
);
uint_wire_type!(
    /// Finalization epoch counter.
    FinalizationEpoch, u32, 4, read_u32, write_u32
);
uint_wire_type!(
    /// Finalization point within an epoch.
    FinalizationPoint, u32, 4, read_u32, write_u32
);
uint_wire_type!(
    /// Nonce mixed into mosaic id derivation so one account can define
    /// many mosaics.
    MosaicNonce, u32, 4, read_u32, write_u32
);

impl MosaicNonce {
    /// Draws a fresh nonce from the OS cryptographic RNG.
    pub fn random() -> Self {
        use rand::Rng;
        Self(rand::rngs::OsRng.gen())
    }
}

macro_rules! byte_array_wire_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Declared byte width on the wire.
            pub const WIRE_SIZE: usize = $len;

            /// The all-zero value. Unsigned transactions and the empty
            /// Merkle root use this.
            pub const fn zero() -> Self {
                Self([0u8; $len])
            }

            /// Borrows the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Returns `true` if every byte is zero.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            /// Copies from a slice, rejecting any other length.
            pub fn try_from_slice(slice: &[u8]) -> CodecResult<Self> {
                if slice.len() != $len {
                    return Err(CodecError::InvalidArgument {
                        entity: stringify!($name),
                        field: "bytes",
                        reason: format!("expected {} bytes, got {}", $len, slice.len()),
                    });
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(slice);
                Ok(Self(arr))
            }

            /// Hex-encoded representation, lowercase.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// Parses a hex string of exactly the declared width.
            pub fn from_hex(s: &str) -> CodecResult<Self> {
                let bytes = hex::decode(s).map_err(|_| CodecError::InvalidArgument {
                    entity: stringify!($name),
                    field: "hex",
                    reason: "malformed hex string".to_string(),
                })?;
                Self::try_from_slice(&bytes)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Long hex dumps make test output unreadable; show a prefix.
                let hex_str = self.to_hex();
                if hex_str.len() > 16 {
                    write!(f, "{}({}..)", stringify!($name), &hex_str[..16])
                } else {
                    write!(f, "{}({})", stringify!($name), hex_str)
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }

        impl WireSerialize for $name {
            fn wire_size(&self) -> usize {
                $len
            }

            fn write_to(&self, writer: &mut BinaryWriter) {
                writer.write_bytes(&self.0);
            }
        }

        impl WireDeserialize for $name {
            fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self> {
                Ok(Self(reader.read_array::<{ $len }>(stringify!($name))?))
            }
        }
    };
}

byte_array_wire_type!(
    /// An Ed25519 public key identifying an account.
    PublicKey, 32
);
byte_array_wire_type!(
    /// An Ed25519 signature. All zeros on an unsigned envelope.
    Signature, 64
);
byte_array_wire_type!(
    /// A 256-bit hash digest.
    Hash256, 32
);
byte_array_wire_type!(
    /// A recipient as written inside transactions: either a real address
    /// or a namespace alias, resolved by the network. 24 bytes.
    UnresolvedAddress, 24
);
byte_array_wire_type!(
    /// A fully resolved account address as stored in state entries.
    /// 25 bytes: network byte plus the 24-byte account identifier.
    Address, 25
);

impl Address {
    /// Compact human-readable rendering.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parses the base58 rendering produced by [`to_base58`](Self::to_base58).
    pub fn from_base58(s: &str) -> CodecResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| CodecError::InvalidArgument {
                entity: "Address",
                field: "base58",
                reason: "malformed base58 string".to_string(),
            })?;
        Self::try_from_slice(&bytes)
    }
}

impl UnresolvedAddress {
    /// Compact human-readable rendering.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parses the base58 rendering produced by [`to_base58`](Self::to_base58).
    pub fn from_base58(s: &str) -> CodecResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| CodecError::InvalidArgument {
                entity: "UnresolvedAddress",
                field: "base58",
                reason: "malformed base58 string".to_string(),
            })?;
        Self::try_from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_decodes_the_documented_example() {
        // The canonical example: 01 00 00 00 00 00 00 00 is height 1.
        let bytes = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let height = Height::from_wire_bytes(&bytes).unwrap();
        assert_eq!(height, Height(1));
        assert_eq!(height.to_wire_bytes(), bytes);
    }

    #[test]
    fn scalar_size_matches_serialized_length() {
        assert_eq!(Height(42).to_wire_bytes().len(), Height(42).wire_size());
        assert_eq!(Amount(7).wire_size(), 8);
        assert_eq!(MosaicNonce(1).wire_size(), 4);
        assert_eq!(FinalizationEpoch(3).to_wire_bytes().len(), 4);
    }

    #[test]
    fn scalar_decode_consumes_exactly_declared_width() {
        let bytes = [0xFF; 12];
        let mut reader = BinaryReader::new(&bytes);
        let _ = Amount::read_from(&mut reader).unwrap();
        assert_eq!(reader.position(), Amount::WIRE_SIZE);
    }

    #[test]
    fn truncated_scalar_names_its_type() {
        let err = Height::from_wire_bytes(&[1, 2, 3]).unwrap_err();
        match err {
            CodecError::StreamTruncated { entity, needed, remaining } => {
                assert_eq!(entity, "Height");
                assert_eq!(needed, 8);
                assert_eq!(remaining, 3);
            }
            other => panic!("expected StreamTruncated, got {other:?}"),
        }
    }

    #[test]
    fn byte_array_roundtrip() {
        let key = PublicKey([0xAB; 32]);
        let bytes = key.to_wire_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(PublicKey::from_wire_bytes(&bytes).unwrap(), key);
    }

    #[test]
    fn signature_zero_is_all_zeros() {
        let sig = Signature::zero();
        assert!(sig.is_zero());
        assert_eq!(sig.wire_size(), 64);
        assert!(sig.to_wire_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn try_from_slice_rejects_wrong_length() {
        assert!(Hash256::try_from_slice(&[0u8; 31]).is_err());
        assert!(Hash256::try_from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn hex_roundtrip() {
        let hash = Hash256([0x5A; 32]);
        let restored = Hash256::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, restored);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Hash256::from_hex("not hex").is_err());
        assert!(Hash256::from_hex("abcd").is_err()); // valid hex, wrong length
    }

    #[test]
    fn address_widths_differ() {
        assert_eq!(UnresolvedAddress::WIRE_SIZE, 24);
        assert_eq!(Address::WIRE_SIZE, 25);
    }

    #[test]
    fn address_base58_roundtrip() {
        let addr = Address([0x11; 25]);
        let restored = Address::from_base58(&addr.to_base58()).unwrap();
        assert_eq!(addr, restored);
    }

    #[test]
    fn random_nonces_differ() {
        // Two draws colliding is a 1-in-4-billion event; a failure here
        // means the RNG is broken, not the test.
        assert_ne!(MosaicNonce::random(), MosaicNonce::random());
    }

    #[test]
    fn debug_output_is_bounded() {
        let debug_str = format!("{:?}", Signature([0xCD; 64]));
        assert!(debug_str.starts_with("Signature("));
        assert!(debug_str.len() < 40);
    }

    #[test]
    fn scalar_json_is_transparent() {
        let json = serde_json::to_string(&Height(7)).unwrap();
        assert_eq!(json, "7");
        let back: Height = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Height(7));
    }

    #[test]
    fn byte_array_json_is_hex() {
        let hash = Hash256([0x01; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", hash.to_hex()));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}

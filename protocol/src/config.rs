//! # Protocol Constants
//!
//! Every magic number in the wire format lives here. If you're hardcoding
//! a width somewhere else, you're doing it wrong and you owe the team
//! coffee.
//!
//! These values define the byte layout of every entity on the network.
//! Changing any of them after mainnet launch is a hard fork, so choose
//! wisely during devnet.

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Mainnet network byte -- 'M'. Mistakes here cost real money.
pub const NETWORK_ID_MAINNET: u8 = 0x4D;

/// Testnet network byte -- 'T'. Where we break things on purpose.
pub const NETWORK_ID_TESTNET: u8 = 0x54;

/// Devnet network byte -- 'D'. Reset weekly, no promises.
pub const NETWORK_ID_DEVNET: u8 = 0x44;

// ---------------------------------------------------------------------------
// Fixed Field Widths
// ---------------------------------------------------------------------------

/// Ed25519 public key width. 32 bytes, always.
pub const PUBLIC_KEY_WIDTH: usize = 32;

/// Ed25519 signature width. 64 bytes. If yours isn't, something has gone
/// terribly wrong.
pub const SIGNATURE_WIDTH: usize = 64;

/// BLAKE3 digest width. 32 bytes.
pub const HASH_WIDTH: usize = 32;

/// Unresolved address width as written inside transactions: the recipient
/// may still be a namespace alias at this point.
pub const UNRESOLVED_ADDRESS_WIDTH: usize = 24;

/// Resolved address width as stored in state entries: the network byte
/// plus the 24-byte account identifier.
pub const ADDRESS_WIDTH: usize = 25;

// ---------------------------------------------------------------------------
// Envelope Layout
// ---------------------------------------------------------------------------

/// Standalone transaction header size: size u32, reserved u32, signature,
/// signer key, reserved u32, version u8, network u8, type u16, max fee
/// u64, deadline u64. The body starts at this offset.
pub const TRANSACTION_HEADER_SIZE: usize = 4 + 4 + SIGNATURE_WIDTH + PUBLIC_KEY_WIDTH + 4 + 1 + 1 + 2 + 8 + 8;

/// Embedded transaction header size: size u32, reserved u32, signer key,
/// reserved u32, version u8, network u8, type u16. No signature, fee, or
/// deadline -- the enclosing aggregate carries those.
pub const EMBEDDED_HEADER_SIZE: usize = 4 + 4 + PUBLIC_KEY_WIDTH + 4 + 1 + 1 + 2;

/// Offset of the version byte inside a standalone header; everything from
/// here to the end of the entity is covered by the signature.
pub const TRANSACTION_SIGNED_DATA_OFFSET: usize = 4 + 4 + SIGNATURE_WIDTH + PUBLIC_KEY_WIDTH + 4;

/// Cosignature record size: version u64, signer key, signature.
pub const COSIGNATURE_SIZE: usize = 8 + PUBLIC_KEY_WIDTH + SIGNATURE_WIDTH;

/// Embedded transactions inside an aggregate are zero-padded so each one
/// starts on this boundary.
pub const AGGREGATE_PAYLOAD_ALIGNMENT: usize = 8;

// ---------------------------------------------------------------------------
// Collection Limits
// ---------------------------------------------------------------------------

/// A transfer message is prefixed by a u16 byte count, so this is the hard
/// ceiling, not a policy choice.
pub const MAX_MESSAGE_SIZE: usize = u16::MAX as usize;

/// Mosaic attachments are prefixed by a u8 count.
pub const MAX_MOSAICS_PER_TRANSFER: usize = u8::MAX as usize;

/// A metadata value is prefixed by a u16 byte count.
pub const MAX_METADATA_VALUE_SIZE: usize = u16::MAX as usize;

/// A namespace name is prefixed by a u8 byte count.
pub const MAX_NAMESPACE_NAME_SIZE: usize = u8::MAX as usize;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Friendly name for a network byte, mainly for logging. Unknown networks
/// get a hex dump because we're helpful like that.
pub fn network_name(network_id: u8) -> String {
    match network_id {
        NETWORK_ID_MAINNET => "mainnet".to_string(),
        NETWORK_ID_TESTNET => "testnet".to_string(),
        NETWORK_ID_DEVNET => "devnet".to_string(),
        other => format!("unknown(0x{:02X})", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_ids_are_distinct() {
        assert_ne!(NETWORK_ID_MAINNET, NETWORK_ID_TESTNET);
        assert_ne!(NETWORK_ID_MAINNET, NETWORK_ID_DEVNET);
        assert_ne!(NETWORK_ID_TESTNET, NETWORK_ID_DEVNET);
    }

    #[test]
    fn header_sizes_add_up() {
        // The envelope layout, field by field.
        assert_eq!(TRANSACTION_HEADER_SIZE, 128);
        assert_eq!(EMBEDDED_HEADER_SIZE, 48);
        assert_eq!(TRANSACTION_SIGNED_DATA_OFFSET, 108);
        assert_eq!(COSIGNATURE_SIZE, 104);
    }

    #[test]
    fn cosignatures_are_already_aligned() {
        // Cosignature records need no padding in the aggregate trailer.
        assert_eq!(COSIGNATURE_SIZE % AGGREGATE_PAYLOAD_ALIGNMENT, 0);
    }

    #[test]
    fn network_name_formatting() {
        assert_eq!(network_name(NETWORK_ID_MAINNET), "mainnet");
        assert_eq!(network_name(0xAB), "unknown(0xAB)");
    }
}

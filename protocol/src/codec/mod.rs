//! # Binary Codec Machinery
//!
//! The plumbing every wire type is built on: a bounds-checked little-endian
//! [`BinaryReader`], an infallible [`BinaryWriter`], shared padding
//! arithmetic, the [`CodecError`] taxonomy, and the two traits that define
//! the encode/decode contract.
//!
//! The contract is deliberately strict and symmetric:
//!
//! - `wire_size()` is recomputed from current field values on every call --
//!   no cached sizes, no trusted counts.
//! - `write_to()` emits exactly `wire_size()` bytes.
//! - `read_from()` consumes exactly `wire_size()` bytes of the value it
//!   returns, or fails without half-built state escaping.
//!
//! Those three properties together give the round-trip law the test suites
//! lean on: `from_wire_bytes(v.to_wire_bytes()) == v` for every type in the
//! crate.

pub mod error;
pub mod padding;
pub mod reader;
pub mod writer;

pub use error::{CodecError, CodecResult};
pub use padding::{padded_size, padding_size};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;

/// Encode half of the wire contract.
///
/// Implementors serialize themselves into a [`BinaryWriter`] in declared
/// field order. Encoding is infallible by design: every structural
/// constraint is enforced when the value is constructed, so by the time
/// `write_to` runs there is nothing left to go wrong.
pub trait WireSerialize {
    /// Exact number of bytes `write_to` will emit, recomputed every call.
    fn wire_size(&self) -> usize;

    /// Appends the canonical byte representation to `writer`.
    fn write_to(&self, writer: &mut BinaryWriter);

    /// Serializes into a fresh buffer of exactly `wire_size()` bytes.
    fn to_wire_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(self.wire_size());
        self.write_to(&mut writer);
        writer.into_bytes()
    }
}

/// Decode half of the wire contract.
pub trait WireDeserialize: Sized {
    /// Reads one value from the cursor, consuming exactly its wire size.
    fn read_from(reader: &mut BinaryReader<'_>) -> CodecResult<Self>;

    /// Decodes one value from the front of `bytes`. Trailing bytes are the
    /// caller's business -- use [`read_from`](Self::read_from) with an
    /// explicit reader to inspect how much was consumed.
    fn from_wire_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let mut reader = BinaryReader::new(bytes);
        Self::read_from(&mut reader)
    }
}

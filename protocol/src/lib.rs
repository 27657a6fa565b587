// Copyright (c) 2026 Meridian Labs. MIT License.
// See LICENSE for details.

//! # Meridian Protocol — Wire Format Library
//!
//! The byte-exact serialization layer for the Meridian network: every
//! transaction, state entry, and receipt the chain understands, encoded
//! and decoded with exact offsets, little-endian integers, reserved
//! padding, tagged unions, and nested composition -- plus the thin model
//! layer that builds those structures and signs them with Ed25519.
//!
//! The crate makes three promises and the test suites hold it to them:
//!
//! 1. **Round-trip**: decoding a serialized entity yields an equal value
//!    and consumes exactly its declared size.
//! 2. **Size agreement**: `wire_size()` equals the serialized length,
//!    recomputed from live field values on every call.
//! 3. **No surprises**: unknown open-enum values pass through untouched,
//!    unknown discriminators fail loudly, and every error names the type
//!    that produced it.
//!
//! ## Architecture
//!
//! The modules mirror the actual concerns of a wire format:
//!
//! - **codec** — Readers, writers, padding arithmetic, the error taxonomy.
//! - **model** — Scalar wire types, enumerations, flag sets.
//! - **crypto** — Ed25519 signing and BLAKE3 hashing. Don't roll your own.
//! - **transaction** — Bodies, the two envelope shapes, aggregation with
//!   its Merkle binding, building, and signing.
//! - **state** — Chain-state entry formats.
//! - **receipt** — Receipt record formats.
//! - **config** — Every protocol constant, in one place.
//!
//! ## Design Philosophy
//!
//! 1. Correctness over performance (but we're still fast).
//! 2. Sizes and counts are recomputed, never cached, never trusted.
//! 3. Decoding is a pure function of the bytes; encoding is a pure
//!    function of the fields. No shared state, no surprises under
//!    concurrency.
//! 4. If it touches the wire, it has tests. Plural.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod model;
pub mod receipt;
pub mod state;
pub mod transaction;

//! Error types for the wire codec.
//!
//! Every decode or construction failure surfaces as a [`CodecError`] naming
//! the entity (and field, where one exists) that failed. The codec performs
//! no recovery and no retries -- a failure is always propagated to the
//! immediate caller.

use thiserror::Error;

/// Convenience alias used throughout the codec.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors produced by the binary codec and the value-path constructors.
///
/// The variants split cleanly by which path raises them: `StreamTruncated`,
/// `InvalidDiscriminant`, and `StructuralInconsistency` come from the decode
/// path; `InvalidArgument` from constructing a record out of explicit
/// values; `InvalidState` from calling a variant accessor against the wrong
/// discriminator branch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes remain in the stream than a fixed-width read requires.
    #[error("{entity}: stream truncated, needed {needed} byte(s) but only {remaining} remain")]
    StreamTruncated {
        /// The type whose read failed.
        entity: &'static str,
        /// Bytes the read required.
        needed: usize,
        /// Bytes actually left in the stream.
        remaining: usize,
    },

    /// A discriminator value outside the closed set of a tagged union.
    ///
    /// Only strictly-closed enumerations (transaction type, registration
    /// type, restriction entry type) raise this. Plain enumerations are
    /// open and tolerate unknown raw values.
    #[error("{entity}: unknown discriminant value {value}")]
    InvalidDiscriminant {
        /// The enumeration or union being decoded.
        entity: &'static str,
        /// The raw value that matched no variant.
        value: u64,
    },

    /// A field is missing or out of range when constructing from explicit
    /// values. Never raised on the stream path -- parsed data is trusted
    /// structurally.
    #[error("{entity}: invalid `{field}`: {reason}")]
    InvalidArgument {
        /// The record being constructed.
        entity: &'static str,
        /// The offending field.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// A variant accessor was called while a different discriminator branch
    /// is active.
    #[error("{entity}: entry type is not set to {expected} (active variant is {actual})")]
    InvalidState {
        /// The tagged union.
        entity: &'static str,
        /// The variant the accessor belongs to.
        expected: &'static str,
        /// The variant actually populated.
        actual: &'static str,
    },

    /// A declared size or count read from the stream does not match the
    /// bytes actually occupied by the payload it describes.
    #[error("{entity}: declared {field} is {declared} but the payload occupies {computed}")]
    StructuralInconsistency {
        /// The record whose declared size disagrees with its contents.
        entity: &'static str,
        /// The size/count field in question.
        field: &'static str,
        /// Value read from the stream.
        declared: u64,
        /// Value computed from the decoded payload.
        computed: u64,
    },
}

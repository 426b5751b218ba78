//! Error types for field construction and codec operations

use thiserror::Error;

/// Errors raised while building a Galois field
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Word size outside the supported 1..=8 bit range
    #[error("unsupported field word size: {num_bits} bits (supported: 1..=8)")]
    UnsupportedWordSize { num_bits: u32 },

    /// Polynomial has the wrong degree or does not generate the full field
    #[error("polynomial {primitive:#x} is not primitive for GF(2^{num_bits})")]
    InvalidPrimitive { primitive: u32, num_bits: u32 },
}

/// Errors raised by Reed-Solomon encoding and decoding
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The byte-oriented codec only works over an 8-bit field
    #[error("codec requires an 8-bit field, got GF(2^{num_bits})")]
    UnsupportedField { num_bits: u32 },

    /// Requested ECC degree cannot produce a usable code
    #[error("invalid ECC degree {degree}: must be in 1..={max}")]
    InvalidDegree { degree: usize, max: usize },

    /// Message must contain at least one byte
    #[error("message must contain at least one byte")]
    EmptyMessage,

    /// Message plus ECC exceeds the field's block length
    #[error("codeword of {len} bytes exceeds the field block limit of {max}")]
    BlockTooLong { len: usize, max: usize },

    /// ECC buffer length does not match the codec's degree
    #[error("ECC length {len} does not match codec degree {expected}")]
    EccLengthMismatch { len: usize, expected: usize },

    /// Root count of the locator polynomial disagrees with its degree;
    /// more errors are present than the code can correct
    #[error(
        "located {located} error bytes but the locator polynomial predicts {expected}; \
         block is uncorrectable"
    )]
    InsufficientCapacity { located: usize, expected: usize },

    /// Forney magnitude computation hit a zero locator derivative
    #[error("error magnitude computation failed (zero locator derivative)")]
    MagnitudeComputation,

    /// Corrected block still fails the syndrome check
    #[error("corrected block still has nonzero syndromes; block is uncorrectable")]
    ResidualErrors,
}

use thiserror::Error;

/// Errors produced while encoding a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value's classified kind has no bencode representation.
    #[error("unsupported value of type {0}")]
    UnsupportedType(String),

    /// A dictionary key did not classify as a byte or text string.
    #[error("dictionary keys must be bytes or text, found {found}")]
    InvalidKeyType {
        /// Kind name of the offending key.
        found: &'static str,
    },

    /// Two keys in the same dictionary or record compared byte-equal.
    #[error("found duplicated key {0:?}")]
    DuplicateKey(Vec<u8>),

    /// A container was encountered twice on the same recursion path.
    #[error("circular reference found")]
    CircularReference,

    /// Output buffer growth could not acquire memory.
    #[error("allocation failure while growing output buffer")]
    AllocationFailure,
}

/// Result of an encode operation.
pub type EncodeResult<T> = Result<T, EncodeError>;

//! Error types for coder construction, encoding and decoding.

use thiserror::Error;

use crate::coder::DataKind;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The five error classes every [`Error`] variant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed stage configuration, raised when a coder is built.
    Config,
    /// A digit produced internally is outside its declared base.
    Range,
    /// Input text or digits not accepted by an alphabet or bit-packing rule.
    Decode,
    /// Checksum verification failed.
    Checksum,
    /// Structurally malformed padding.
    Padding,
}

impl ErrorKind {
    /// Returns the short tag used in error messages (e.g., "checksum").
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorKind::Config => "config",
            ErrorKind::Range => "range",
            ErrorKind::Decode => "decode",
            ErrorKind::Checksum => "checksum",
            ErrorKind::Padding => "padding",
        }
    }
}

/// Error raised by a stage, a chain or a named encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // === Config ===
    #[error("[config] alphabet is empty")]
    EmptyAlphabet,

    #[error("[config] alphabet symbol {symbol:?} appears at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },

    #[error("[config] radix {base} is not supported (must be at least 2)")]
    InvalidRadix { base: u32 },

    #[error("[config] bit width {bits} is not supported (must be 1..=32)")]
    InvalidBitWidth { bits: u32 },

    #[error("[config] checksum size must be non-zero")]
    InvalidChecksumSize,

    #[error("[config] chain has no stages")]
    EmptyChain,

    #[error("[config] stage {index} expects {found:?} input but the previous stage produces {expected:?}")]
    StageMismatch {
        index: usize,
        expected: DataKind,
        found: DataKind,
    },

    #[error("[config] unknown encoding: {name:?}")]
    UnknownEncoding { name: String },

    // === Range ===
    #[error("[range] digit {digit} out of range for base {base}")]
    DigitOutOfRange { digit: u32, base: u64 },

    #[error("[range] expected {expected:?} data, found {found:?}")]
    UnexpectedData { expected: DataKind, found: DataKind },

    #[error("[range] checksum function returned {len} bytes, need at least {size}")]
    ShortHashOutput { len: usize, size: usize },

    // === Decode ===
    #[error("[decode] invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("[decode] malformed segment at position {position}")]
    InvalidSegment { position: usize },

    #[error("[decode] string must be entirely lowercase or entirely uppercase")]
    MixedCase,

    #[error("[decode] separator '1' must be present between prefix and data")]
    MissingSeparator,

    #[error("[decode] human-readable part is empty")]
    EmptyPrefix,

    #[error("[decode] invalid human-readable part {prefix:?}")]
    InvalidPrefix { prefix: String },

    #[error("[decode] human-readable part length {len} exceeds maximum {max}")]
    PrefixTooLong { len: usize, max: usize },

    #[error("[decode] string length {len} outside {min}..={max}")]
    InvalidLength { len: usize, min: usize, max: usize },

    #[error("[decode] length {len} exceeds limit {limit}")]
    LengthExceedsLimit { len: usize, limit: usize },

    #[error("[decode] data part has {len} characters, need at least {min}")]
    DataTooShort { len: usize, min: usize },

    #[error("[decode] hex string has odd length {len}")]
    OddHexLength { len: usize },

    #[error("[decode] block of {len} characters is not a valid base58xmr block")]
    InvalidBlockLength { len: usize },

    #[error("[decode] base58xmr block has non-zero padding")]
    NonZeroBlockPadding,

    #[error("[decode] invalid UTF-8")]
    InvalidUtf8,

    // === Checksum ===
    #[error("[checksum] checksum mismatch")]
    ChecksumMismatch,

    #[error("[checksum] input of {len} bytes is shorter than the {size}-byte checksum")]
    MissingChecksum { len: usize, size: usize },

    #[error("[checksum] invalid bech32 checksum (polymod {residue:#x}, expected {target:#x})")]
    Bech32Checksum { residue: u32, target: u32 },

    // === Padding ===
    #[error("[padding] {len} symbols of {bits} bits do not form whole bytes")]
    PartialByte { len: usize, bits: u32 },

    #[error("[padding] string has too much padding")]
    TooMuchPadding,

    #[error("[padding] {bits} leftover bits form a whole extra digit")]
    ExcessPadding { bits: u32 },

    #[error("[padding] non-zero padding bits: {value:#x}")]
    NonZeroPadding { value: u64 },
}

impl Error {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyAlphabet
            | Error::DuplicateSymbol { .. }
            | Error::InvalidRadix { .. }
            | Error::InvalidBitWidth { .. }
            | Error::InvalidChecksumSize
            | Error::EmptyChain
            | Error::StageMismatch { .. }
            | Error::UnknownEncoding { .. } => ErrorKind::Config,

            Error::DigitOutOfRange { .. }
            | Error::UnexpectedData { .. }
            | Error::ShortHashOutput { .. } => ErrorKind::Range,

            Error::ChecksumMismatch
            | Error::MissingChecksum { .. }
            | Error::Bech32Checksum { .. } => ErrorKind::Checksum,

            Error::PartialByte { .. }
            | Error::TooMuchPadding
            | Error::ExcessPadding { .. }
            | Error::NonZeroPadding { .. } => ErrorKind::Padding,

            _ => ErrorKind::Decode,
        }
    }

    /// Shifts the reported position of a symbol error by `offset`.
    ///
    /// Used when a stage decodes a slice of a larger string.
    pub(crate) fn offset_position(self, offset: usize) -> Self {
        match self {
            Error::InvalidSymbol { symbol, position } => Error::InvalidSymbol {
                symbol,
                position: position + offset,
            },
            Error::InvalidSegment { position } => Error::InvalidSegment {
                position: position + offset,
            },
            other => other,
        }
    }
}

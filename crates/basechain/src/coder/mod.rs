//! Invertible coder stages and their composition.
//!
//! Every stage implements [`Coder`]: `encode` maps the decoded form to the
//! encoded form and `decode` is its inverse. Stages are wrapped in [`Stage`]
//! so they can be placed in a [`Chain`], which checks at construction that
//! the output of each stage is the input of the next.
//!
//! A typical text codec is `bytes -> Radix2 -> Alphabet -> Padding -> Join -> text`.

pub mod alphabet;
pub mod chain;
pub mod checksum;
pub mod radix;
pub mod radix2;
pub mod stage;
pub mod text;

pub use alphabet::Alphabet;
pub use chain::Chain;
pub use checksum::{Checksum, HashFn};
pub use radix::{Radix, convert_radix};
pub use radix2::{Radix2, convert_radix2};
pub use stage::Stage;
pub use text::{Join, Normalize, NormalizeFn, Padding};

use crate::error::{Error, Result};

/// An invertible transformation.
///
/// For every `x` accepted by `encode`, `decode(encode(x)?)` must return `x`.
/// The converse need not hold: `decode` may normalize its input.
pub trait Coder {
    /// The plain side of the transformation.
    type Decoded;
    /// The encoded side of the transformation.
    type Encoded;

    /// Transforms a plain value into its encoded form.
    fn encode(&self, input: Self::Decoded) -> Result<Self::Encoded>;

    /// Transforms an encoded value back into its plain form.
    fn decode(&self, input: Self::Encoded) -> Result<Self::Decoded>;
}

/// The shape of the values flowing between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Base-256 digits.
    Bytes,
    /// Digits in an arbitrary base.
    Digits,
    /// One character per digit.
    Symbols,
    /// A single string.
    Text,
}

/// A value flowing through a [`Chain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    Bytes(Vec<u8>),
    Digits(Vec<u32>),
    Symbols(Vec<char>),
    Text(String),
}

impl Data {
    /// Returns the kind of this value.
    pub fn kind(&self) -> DataKind {
        match self {
            Data::Bytes(_) => DataKind::Bytes,
            Data::Digits(_) => DataKind::Digits,
            Data::Symbols(_) => DataKind::Symbols,
            Data::Text(_) => DataKind::Text,
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Data::Bytes(bytes) => Ok(bytes),
            other => Err(other.mismatch(DataKind::Bytes)),
        }
    }

    pub fn into_digits(self) -> Result<Vec<u32>> {
        match self {
            Data::Digits(digits) => Ok(digits),
            other => Err(other.mismatch(DataKind::Digits)),
        }
    }

    pub fn into_symbols(self) -> Result<Vec<char>> {
        match self {
            Data::Symbols(symbols) => Ok(symbols),
            other => Err(other.mismatch(DataKind::Symbols)),
        }
    }

    pub fn into_text(self) -> Result<String> {
        match self {
            Data::Text(text) => Ok(text),
            other => Err(other.mismatch(DataKind::Text)),
        }
    }

    fn mismatch(&self, expected: DataKind) -> Error {
        Error::UnexpectedData {
            expected,
            found: self.kind(),
        }
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Data::Bytes(bytes)
    }
}

impl From<String> for Data {
    fn from(text: String) -> Self {
        Data::Text(text)
    }
}

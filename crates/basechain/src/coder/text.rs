//! Text-level stages: padding, joining and input normalization.

use std::fmt;
use std::sync::Arc;

use crate::coder::Coder;
use crate::error::{Error, Result};

/// Symbols <-> a single string, with an optional separator between symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Join {
    separator: String,
}

impl Join {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Joins symbols with no separator.
    pub fn concat() -> Self {
        Self::default()
    }
}

impl Coder for Join {
    type Decoded = Vec<char>;
    type Encoded = String;

    fn encode(&self, symbols: Vec<char>) -> Result<String> {
        let mut text = String::with_capacity(symbols.len() * (1 + self.separator.len()));
        for (i, symbol) in symbols.into_iter().enumerate() {
            if i > 0 {
                text.push_str(&self.separator);
            }
            text.push(symbol);
        }
        Ok(text)
    }

    fn decode(&self, text: String) -> Result<Vec<char>> {
        if self.separator.is_empty() {
            return Ok(text.chars().collect());
        }
        if text.is_empty() {
            return Ok(Vec::new());
        }
        text.split(self.separator.as_str())
            .enumerate()
            .map(|(position, segment)| {
                let mut chars = segment.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Ok(symbol),
                    _ => Err(Error::InvalidSegment { position }),
                }
            })
            .collect()
    }
}

/// Pads symbols with `pad` until they describe a whole number of bytes.
///
/// Each symbol carries `bits` bits. Decoding requires whole bytes and rejects
/// a pad character at a byte-aligned position (more padding than needed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    bits: u32,
    pad: char,
}

impl Padding {
    pub fn new(bits: u32, pad: char) -> Result<Self> {
        if bits == 0 || bits > 32 {
            return Err(Error::InvalidBitWidth { bits });
        }
        Ok(Self { bits, pad })
    }

    fn is_byte_aligned(&self, len: usize) -> bool {
        (len as u64 * u64::from(self.bits)) % 8 == 0
    }
}

impl Coder for Padding {
    type Decoded = Vec<char>;
    type Encoded = Vec<char>;

    fn encode(&self, mut symbols: Vec<char>) -> Result<Vec<char>> {
        while !self.is_byte_aligned(symbols.len()) {
            symbols.push(self.pad);
        }
        Ok(symbols)
    }

    fn decode(&self, mut symbols: Vec<char>) -> Result<Vec<char>> {
        if !self.is_byte_aligned(symbols.len()) {
            return Err(Error::PartialByte {
                len: symbols.len(),
                bits: self.bits,
            });
        }
        while symbols.last() == Some(&self.pad) {
            let last = symbols.len() - 1;
            if self.is_byte_aligned(last) {
                return Err(Error::TooMuchPadding);
            }
            symbols.truncate(last);
        }
        Ok(symbols)
    }
}

/// Rewrites text before it is decoded.
pub type NormalizeFn = Arc<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Decode-only text rewrite (case folding, look-alike substitution).
///
/// Encoding passes text through unchanged, so a decoded-then-encoded string
/// may differ from the original.
#[derive(Clone)]
pub struct Normalize {
    normalize: NormalizeFn,
}

impl Normalize {
    pub fn new<F>(normalize: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            normalize: Arc::new(normalize),
        }
    }
}

impl fmt::Debug for Normalize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalize").finish_non_exhaustive()
    }
}

impl Coder for Normalize {
    type Decoded = String;
    type Encoded = String;

    fn encode(&self, text: String) -> Result<String> {
        Ok(text)
    }

    fn decode(&self, text: String) -> Result<String> {
        (self.normalize)(&text)
    }
}

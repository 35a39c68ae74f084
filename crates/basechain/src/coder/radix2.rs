//! Power-of-two base conversion by bit repacking.
//!
//! Runs in linear time: the input is read as one big-endian bit stream and
//! regrouped into `to`-bit digits.

use crate::coder::Coder;
use crate::error::{Error, Result};

/// Repacks `from`-bit digits into `to`-bit digits.
///
/// With `padding`, a trailing partial group is emitted with zero low bits.
/// Without it, the leftover must be shorter than one `from`-bit digit and
/// all-zero; this is the strict inverse of a padded conversion.
pub fn convert_radix2(data: &[u32], from: u32, to: u32, padding: bool) -> Result<Vec<u32>> {
    check_bits(from)?;
    check_bits(to)?;

    let mask = (1u64 << to) - 1;
    let mut result = Vec::with_capacity((data.len() * from as usize).div_ceil(to as usize));
    // Invariant: carry < 2^pos and pos < to, so carry << from fits in 63 bits.
    let mut carry = 0u64;
    let mut pos = 0u32;
    for &digit in data {
        if u64::from(digit) >> from != 0 {
            return Err(Error::DigitOutOfRange {
                digit,
                base: 1u64 << from,
            });
        }
        carry = (carry << from) | u64::from(digit);
        pos += from;
        while pos >= to {
            result.push(((carry >> (pos - to)) & mask) as u32);
            pos -= to;
        }
        carry &= (1u64 << pos) - 1;
    }

    let tail = (carry << (to - pos)) & mask;
    if padding {
        if pos > 0 {
            result.push(tail as u32);
        }
    } else {
        if pos >= from {
            return Err(Error::ExcessPadding { bits: pos });
        }
        if tail != 0 {
            return Err(Error::NonZeroPadding { value: tail });
        }
    }
    Ok(result)
}

fn check_bits(bits: u32) -> Result<()> {
    if bits == 0 || bits > 32 {
        return Err(Error::InvalidBitWidth { bits });
    }
    Ok(())
}

/// Bytes <-> base-`2^bits` digits using [`convert_radix2`].
///
/// By default encoding pads the final digit with zero bits and decoding
/// rejects any leftover that is not zero padding. `rev_padding` swaps the
/// roles: encoding must consume the bytes exactly and decoding accepts a
/// partial trailing byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix2 {
    bits: u32,
    rev_padding: bool,
}

impl Radix2 {
    /// Creates a converter to `bits`-bit digits (1..=32).
    pub fn new(bits: u32) -> Result<Self> {
        Self::with_rev_padding(bits, false)
    }

    /// Creates a converter with the padding direction chosen explicitly.
    pub fn with_rev_padding(bits: u32, rev_padding: bool) -> Result<Self> {
        check_bits(bits)?;
        Ok(Self { bits, rev_padding })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl Coder for Radix2 {
    type Decoded = Vec<u8>;
    type Encoded = Vec<u32>;

    fn encode(&self, bytes: Vec<u8>) -> Result<Vec<u32>> {
        let digits: Vec<u32> = bytes.into_iter().map(u32::from).collect();
        convert_radix2(&digits, 8, self.bits, !self.rev_padding)
    }

    fn decode(&self, digits: Vec<u32>) -> Result<Vec<u8>> {
        let bytes = convert_radix2(&digits, self.bits, 8, self.rev_padding)?;
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }
}

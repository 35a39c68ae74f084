//! Arbitrary-base conversion by repeated long division.
//!
//! The input is treated as one big-endian unsigned integer. Each pass divides
//! the remaining digits by the target base and yields one output digit, so the
//! cost is O(input * output). Callers decoding untrusted text through a
//! non-power-of-two base should bound its length first.

use crate::coder::Coder;
use crate::error::{Error, Result};

/// Converts big-endian digits in base `from` to big-endian digits in base `to`.
///
/// Leading zero digits are preserved one-for-one: `[0, 0, 1]` in base 256
/// becomes `[0, 0, 1]` in base 58. An empty input yields an empty output.
pub fn convert_radix(data: &[u32], from: u32, to: u32) -> Result<Vec<u32>> {
    check_radix(from)?;
    check_radix(to)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut digits = Vec::with_capacity(data.len());
    for &digit in data {
        if digit >= from {
            return Err(Error::DigitOutOfRange {
                digit,
                base: u64::from(from),
            });
        }
        digits.push(digit);
    }

    let from = u64::from(from);
    let to = u64::from(to);
    let mut result = Vec::new();
    // Digits before `start` are known to be zero.
    let mut start = 0;
    loop {
        let mut carry = 0u64;
        let mut done = true;
        for i in start..digits.len() {
            // carry < to and digit < from, so this stays below from * to.
            let value = from * carry + u64::from(digits[i]);
            let quotient = value / to;
            carry = value % to;
            digits[i] = quotient as u32;
            if !done {
                continue;
            }
            if quotient == 0 {
                start = i;
            } else {
                done = false;
            }
        }
        result.push(carry as u32);
        if done {
            break;
        }
    }

    // The division loop keeps a single zero for an all-zero input.
    let leading_zeros = data[..data.len() - 1]
        .iter()
        .take_while(|&&digit| digit == 0)
        .count();
    result.extend(std::iter::repeat_n(0, leading_zeros));
    result.reverse();
    Ok(result)
}

fn check_radix(base: u32) -> Result<()> {
    if base < 2 {
        return Err(Error::InvalidRadix { base });
    }
    Ok(())
}

/// Bytes <-> base-`base` digits using [`convert_radix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix {
    base: u32,
}

impl Radix {
    /// Creates a converter to `base` digits. `base` must be at least 2.
    pub fn new(base: u32) -> Result<Self> {
        check_radix(base)?;
        Ok(Self { base })
    }

    pub fn base(&self) -> u32 {
        self.base
    }
}

impl Coder for Radix {
    type Decoded = Vec<u8>;
    type Encoded = Vec<u32>;

    fn encode(&self, bytes: Vec<u8>) -> Result<Vec<u32>> {
        let digits: Vec<u32> = bytes.into_iter().map(u32::from).collect();
        convert_radix(&digits, 256, self.base)
    }

    fn decode(&self, digits: Vec<u32>) -> Result<Vec<u8>> {
        let bytes = convert_radix(&digits, self.base, 256)?;
        // convert_radix to base 256 only yields digits below 256.
        Ok(bytes.into_iter().map(|b| b as u8).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_known_value() {
        // 0x0102 = 258 = 4 * 58 + 26
        assert_eq!(convert_radix(&[1, 2], 256, 58).unwrap(), vec![4, 26]);
        assert_eq!(convert_radix(&[4, 26], 58, 256).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let radix = Radix::new(58).unwrap();
        let digits = radix.encode(vec![0, 0, 1, 2, 3]).unwrap();
        assert_eq!(&digits[..2], &[0, 0]);
        assert_ne!(digits[2], 0);
        assert_eq!(radix.decode(digits).unwrap(), vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_all_zero_input() {
        assert_eq!(convert_radix(&[0], 256, 58).unwrap(), vec![0]);
        assert_eq!(convert_radix(&[0, 0, 0], 256, 58).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(convert_radix(&[], 256, 58).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_radix() {
        assert_eq!(Radix::new(1), Err(Error::InvalidRadix { base: 1 }));
        assert_eq!(convert_radix(&[1], 0, 10), Err(Error::InvalidRadix { base: 0 }));
    }

    #[test]
    fn test_digit_out_of_range() {
        let result = convert_radix(&[1, 58], 58, 256);
        assert_eq!(result, Err(Error::DigitOutOfRange { digit: 58, base: 58 }));
    }

    #[test]
    fn test_large_bases() {
        let digits = convert_radix(&[255, 255, 255, 255], 256, u32::MAX).unwrap();
        assert_eq!(digits, vec![1, 0]);
        assert_eq!(
            convert_radix(&digits, u32::MAX, 256).unwrap(),
            vec![255, 255, 255, 255]
        );
    }
}

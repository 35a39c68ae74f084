//! Base58 flavors.
//!
//! Base58 has no power-of-two base, so it goes through the generic
//! long-division [`Radix`] stage and costs O(n^2). Bound input lengths before
//! decoding untrusted text.

use lazy_static::lazy_static;

use crate::coder::{Alphabet, Checksum, Join, Radix, Stage};
use crate::encodings::{Encoding, PRESET, TextEncoding};
use crate::error::{Error, Result};
use crate::limits::{BASE58CHECK_CHECKSUM_LEN, XMR_BLOCK_LEN, XMR_BLOCK_SIZE, XMR_ENCODED_BLOCK_SIZE};

pub const BITCOIN_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const FLICKR_ALPHABET: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
pub const XRP_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Digit 0 of the Bitcoin alphabet, used to left-pad base58xmr blocks.
const ZERO_SYMBOL: char = '1';

/// Builds `radix(58) -> alphabet -> join`.
pub fn base58_with_alphabet(name: &'static str, symbols: &str) -> Result<Encoding> {
    Encoding::new(
        name,
        [
            Stage::from(Radix::new(58)?),
            Alphabet::new(symbols)?.into(),
            Join::concat().into(),
        ],
    )
}

lazy_static! {
    /// Bitcoin alphabet.
    pub static ref BASE58: Encoding =
        base58_with_alphabet("base58", BITCOIN_ALPHABET).expect(PRESET);
    pub static ref BASE58_FLICKR: Encoding =
        base58_with_alphabet("base58flickr", FLICKR_ALPHABET).expect(PRESET);
    pub static ref BASE58_XRP: Encoding =
        base58_with_alphabet("base58xrp", XRP_ALPHABET).expect(PRESET);
}

/// Monero's block base58: every 8-byte block is encoded separately and
/// left-padded with the zero symbol to a fixed width (11 chars for a full
/// block), which keeps the cost linear in the input length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Xmr;

pub static BASE58_XMR: Base58Xmr = Base58Xmr;

impl TextEncoding for Base58Xmr {
    fn name(&self) -> &str {
        "base58xmr"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        let blocks = bytes.len().div_ceil(XMR_BLOCK_SIZE);
        let mut text = String::with_capacity(blocks * XMR_ENCODED_BLOCK_SIZE);
        for block in bytes.chunks(XMR_BLOCK_SIZE) {
            let encoded = BASE58.encode(block)?;
            let width = XMR_BLOCK_LEN[block.len()];
            let pad = width.saturating_sub(encoded.len());
            text.extend(std::iter::repeat_n(ZERO_SYMBOL, pad));
            text.push_str(&encoded);
        }
        Ok(text)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let symbols: Vec<char> = text.chars().collect();
        let blocks = symbols.len().div_ceil(XMR_ENCODED_BLOCK_SIZE);
        let mut bytes = Vec::with_capacity(blocks * XMR_BLOCK_SIZE);
        for (index, slice) in symbols.chunks(XMR_ENCODED_BLOCK_SIZE).enumerate() {
            let block_len = XMR_BLOCK_LEN
                .iter()
                .position(|&width| width == slice.len())
                .ok_or(Error::InvalidBlockLength { len: slice.len() })?;

            let block: String = slice.iter().collect();
            let block = BASE58
                .decode(&block)
                .map_err(|e| e.offset_position(index * XMR_ENCODED_BLOCK_SIZE))?;
            if block.len() < block_len {
                return Err(Error::InvalidBlockLength { len: slice.len() });
            }

            let (padding, payload) = block.split_at(block.len() - block_len);
            if padding.iter().any(|&b| b != 0) {
                return Err(Error::NonZeroBlockPadding);
            }
            bytes.extend_from_slice(payload);
        }
        Ok(bytes)
    }
}

/// Base58 with a 4-byte checksum appended before encoding.
///
/// The checksum function is injected by the caller, typically the first
/// bytes of a double SHA-256:
///
/// ```rust
/// use basechain::encodings::{Base58Check, TextEncoding};
///
/// // Any function works; real callers pass sha256(sha256(data)).
/// let check = Base58Check::new(|data: &[u8]| {
///     let sum = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
///     vec![sum; 4]
/// })
/// .unwrap();
/// let text = check.encode(&[0, 1, 2]).unwrap();
/// assert_eq!(check.decode(&text).unwrap(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Base58Check {
    encoding: Encoding,
}

impl Base58Check {
    pub fn new<F>(hash: F) -> Result<Self>
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        let encoding = Encoding::new(
            "base58check",
            [
                Stage::from(Checksum::new(BASE58CHECK_CHECKSUM_LEN, hash)?),
                BASE58.chain().clone().into(),
            ],
        )?;
        Ok(Self { encoding })
    }
}

impl TextEncoding for Base58Check {
    fn name(&self) -> &str {
        self.encoding.name()
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        self.encoding.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        self.encoding.decode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn unhex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn test_base58_vectors() {
        let vectors = [
            ("", ""),
            ("61", "2g"),
            ("626262", "a3gV"),
            ("636363", "aPEr"),
            ("572e4794", "3EFU7m"),
            ("10c8511e", "Rt5zm"),
            ("00000000000000000000", "1111111111"),
            ("0000287fb4cd", "11233QC4"),
        ];
        for (hex, text) in vectors {
            let bytes = unhex(hex);
            assert_eq!(BASE58.encode(&bytes).unwrap(), text, "{hex}");
            assert_eq!(BASE58.decode(text).unwrap(), bytes, "{text}");
        }
        assert_eq!(BASE58.encode(b"Hello World!").unwrap(), "2NEpo7TZRRrLZSi2U");
    }

    #[test]
    fn test_leading_zero_preservation() {
        let bytes = [0u8, 0, 1, 2, 3];
        let text = BASE58.encode(&bytes).unwrap();
        assert!(text.starts_with("11"));
        assert_eq!(BASE58.decode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_invalid_character() {
        let err = BASE58.decode("2g0").unwrap_err();
        assert_eq!(err, Error::InvalidSymbol { symbol: '0', position: 2 });
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_alphabets_share_digits() {
        let bytes = b"cross flavor";
        let bitcoin = BASE58.encode(bytes).unwrap();
        let flickr = BASE58_FLICKR.encode(bytes).unwrap();
        let xrp = BASE58_XRP.encode(bytes).unwrap();
        assert_eq!(bitcoin.len(), flickr.len());
        assert_eq!(bitcoin.len(), xrp.len());
        // Same digits, so translating symbol-by-symbol maps one onto the other.
        let translated: String = bitcoin
            .chars()
            .map(|c| {
                let digit = BITCOIN_ALPHABET.chars().position(|s| s == c).unwrap();
                XRP_ALPHABET.chars().nth(digit).unwrap()
            })
            .collect();
        assert_eq!(translated, xrp);
        assert_eq!(BASE58_FLICKR.decode(&flickr).unwrap(), bytes);
        assert_eq!(BASE58_XRP.decode(&xrp).unwrap(), bytes);
    }

    #[test]
    fn test_xrp_zero_symbol() {
        assert_eq!(BASE58_XRP.encode(&[0, 0]).unwrap(), "rr");
    }

    #[test]
    fn test_xmr_full_block_matches_base58() {
        let block = [0xffu8; 8];
        let plain = BASE58.encode(&block).unwrap();
        assert_eq!(plain.len(), 11);
        assert_eq!(BASE58_XMR.encode(&block).unwrap(), plain);

        let two_blocks = [0xffu8; 16];
        assert_eq!(BASE58_XMR.encode(&two_blocks).unwrap(), format!("{plain}{plain}"));
        assert_eq!(BASE58_XMR.decode(&format!("{plain}{plain}")).unwrap(), two_blocks);
    }

    #[test]
    fn test_xmr_block_widths() {
        for len in 0..=XMR_BLOCK_SIZE {
            let bytes = vec![0xab; len];
            let text = BASE58_XMR.encode(&bytes).unwrap();
            assert_eq!(text.len(), XMR_BLOCK_LEN[len], "len {len}");
            assert_eq!(BASE58_XMR.decode(&text).unwrap(), bytes, "len {len}");
        }
    }

    #[test]
    fn test_xmr_zero_blocks() {
        let zeros = [0u8; 8];
        assert_eq!(BASE58_XMR.encode(&zeros).unwrap(), "11111111111");
        assert_eq!(BASE58_XMR.decode("11111111111").unwrap(), zeros);

        // A small value in a full block is padded, unlike plain base58.
        let small = [0, 0, 0, 0, 0, 0, 0, 1];
        let text = BASE58_XMR.encode(&small).unwrap();
        assert_eq!(text, "11111111112");
        assert_eq!(BASE58.encode(&small).unwrap(), "11111112");
        assert_eq!(BASE58_XMR.decode(&text).unwrap(), small);
    }

    #[test]
    fn test_xmr_multi_block_with_tail() {
        let bytes: Vec<u8> = (0u8..21).collect();
        let text = BASE58_XMR.encode(&bytes).unwrap();
        assert_eq!(text.len(), 11 + 11 + XMR_BLOCK_LEN[5]);
        assert_eq!(BASE58_XMR.decode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_xmr_rejects_bad_blocks() {
        // 4 characters is not a valid block width
        assert_eq!(BASE58_XMR.decode("1111"), Err(Error::InvalidBlockLength { len: 4 }));
        // 2 chars encode one byte; "zz" is 57*58+57 = 3363, which needs two
        assert_eq!(BASE58_XMR.decode("zz"), Err(Error::NonZeroBlockPadding));
        // Bad symbol in the second block reports its absolute position
        let err = BASE58_XMR.decode("11111111111110").unwrap_err();
        assert_eq!(err, Error::InvalidSymbol { symbol: '0', position: 13 });
    }

    #[test]
    fn test_base58check_with_custom_hash() {
        let check = Base58Check::new(|data: &[u8]| {
            let sum = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
            vec![sum, sum ^ 0xff, 0x5a, 0xa5]
        })
        .unwrap();
        let text = check.encode(&[0, 10, 20]).unwrap();
        assert!(text.starts_with('1'));
        assert_eq!(check.decode(&text).unwrap(), vec![0, 10, 20]);

        let tampered = BASE58.encode(&[0, 10, 21, 30, 0xe1, 0x5a, 0xa5]).unwrap();
        assert_eq!(check.decode(&tampered), Err(Error::ChecksumMismatch));
        assert_eq!(
            check.decode("2g"),
            Err(Error::MissingChecksum { len: 1, size: 4 })
        );
    }
}

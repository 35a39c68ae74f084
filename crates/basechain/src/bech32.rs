//! Bech32 (BIP-173) and bech32m (BIP-350).
//!
//! A bech32 string is `<prefix>1<data><checksum>`: the data part is 5-bit
//! words rendered with a 32-character alphabet, followed by six checksum words
//! computed by a BCH code over GF(32) that also covers the prefix.
//!
//! ```rust
//! use basechain::bech32::BECH32;
//!
//! let decoded = BECH32.decode("A12UEL5L").unwrap();
//! assert_eq!(decoded.prefix, "a");
//! assert!(decoded.words.is_empty());
//!
//! // Decoding lowercases, so re-encoding is not the identity on text.
//! assert_eq!(BECH32.encode(&decoded.prefix, &decoded.words).unwrap(), "a12uel5l");
//! ```
//!
//! Witness programs carry a leading version word that is not part of the
//! bit-packed payload; only byte-aligned payloads should go through
//! [`Bech32::from_words`] and [`Bech32::decode_to_bytes`].

use lazy_static::lazy_static;

use crate::coder::{Alphabet, Chain, Coder, Data, Join, Radix2, Stage};
use crate::error::{Error, Result};
use crate::limits::{
    BECH32_CHECKSUM_LEN, BECH32_CONST, BECH32_MAX_LEN, BECH32_MAX_PREFIX_LEN, BECH32_MIN_LEN,
    BECH32_SEPARATOR, BECH32M_CONST,
};

/// The bech32 data alphabet.
pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATORS: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Checksum variant, distinguished only by the target polymod residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Bech32,
    Bech32m,
}

impl Variant {
    /// The residue a valid string's polymod must equal.
    pub fn target(self) -> u32 {
        match self {
            Variant::Bech32 => BECH32_CONST,
            Variant::Bech32m => BECH32M_CONST,
        }
    }
}

/// Options for encoding and decoding bech32 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bech32Options {
    /// Maximum total string length. `None` disables the check.
    pub limit: Option<usize>,
}

impl Bech32Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options without an overall length limit.
    pub fn unlimited() -> Self {
        Self { limit: None }
    }
}

impl Default for Bech32Options {
    fn default() -> Self {
        Self {
            limit: Some(BECH32_MAX_LEN),
        }
    }
}

/// BCH polymod over 5-bit values.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expands the prefix into the 5-bit values covered by the checksum:
/// high bits of each char, a zero, then low bits of each char.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let bytes = prefix.as_bytes();
    let mut values = Vec::with_capacity(bytes.len() * 2 + 1);
    values.extend(bytes.iter().map(|b| b >> 5));
    values.push(0);
    values.extend(bytes.iter().map(|b| b & 0x1f));
    values
}

/// Checksum stage for one prefix: appends six words on encode, verifies and
/// strips them on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bech32Checksum<'a> {
    prefix: &'a str,
    variant: Variant,
}

impl<'a> Bech32Checksum<'a> {
    /// `prefix` must already be lowercase and validated.
    pub fn new(prefix: &'a str, variant: Variant) -> Self {
        Self { prefix, variant }
    }

    fn residue(&self, words: &[u8], trailing_zeros: usize) -> u32 {
        let mut values = expand_prefix(self.prefix);
        values.extend_from_slice(words);
        values.extend(std::iter::repeat_n(0, trailing_zeros));
        polymod(&values)
    }
}

impl Coder for Bech32Checksum<'_> {
    type Decoded = Vec<u8>;
    type Encoded = Vec<u8>;

    fn encode(&self, mut words: Vec<u8>) -> Result<Vec<u8>> {
        if let Some(&word) = words.iter().find(|&&w| w >= 32) {
            return Err(Error::DigitOutOfRange {
                digit: u32::from(word),
                base: 32,
            });
        }
        let sum = self.residue(&words, BECH32_CHECKSUM_LEN) ^ self.variant.target();
        words.extend((0..BECH32_CHECKSUM_LEN).map(|i| ((sum >> (5 * (5 - i))) & 0x1f) as u8));
        Ok(words)
    }

    fn decode(&self, mut words: Vec<u8>) -> Result<Vec<u8>> {
        if words.len() < BECH32_CHECKSUM_LEN {
            return Err(Error::MissingChecksum {
                len: words.len(),
                size: BECH32_CHECKSUM_LEN,
            });
        }
        let residue = self.residue(&words, 0);
        let target = self.variant.target();
        if residue != target {
            tracing::debug!(prefix = self.prefix, residue, target, "bech32 checksum mismatch");
            return Err(Error::Bech32Checksum { residue, target });
        }
        words.truncate(words.len() - BECH32_CHECKSUM_LEN);
        Ok(words)
    }
}

/// Result of decoding a bech32 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Lowercased human-readable part.
    pub prefix: String,
    /// Data words (0..32), checksum removed.
    pub words: Vec<u8>,
}

/// Result of [`Bech32::decode_to_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBytes {
    pub prefix: String,
    pub words: Vec<u8>,
    pub bytes: Vec<u8>,
}

/// A bech32 or bech32m codec.
#[derive(Debug, Clone)]
pub struct Bech32 {
    variant: Variant,
    charset: Chain,
    words: Radix2,
}

lazy_static! {
    /// Bech32 (BIP-173).
    pub static ref BECH32: Bech32 = Bech32::new(Variant::Bech32)
        .expect("bech32 charset is a valid alphabet");
    /// Bech32m (BIP-350).
    pub static ref BECH32M: Bech32 = Bech32::new(Variant::Bech32m)
        .expect("bech32 charset is a valid alphabet");
}

impl Bech32 {
    pub fn new(variant: Variant) -> Result<Self> {
        let charset = Chain::new([Stage::from(Alphabet::new(CHARSET)?), Join::concat().into()])?;
        Ok(Self {
            variant,
            charset,
            words: Radix2::new(5)?,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encodes `words` under `prefix` with the default 90-character limit.
    pub fn encode(&self, prefix: &str, words: &[u8]) -> Result<String> {
        self.encode_with_options(prefix, words, Bech32Options::default())
    }

    pub fn encode_with_options(
        &self,
        prefix: &str,
        words: &[u8],
        options: Bech32Options,
    ) -> Result<String> {
        let prefix = prefix.to_ascii_lowercase();
        validate_prefix(&prefix)?;

        let len = prefix.len() + 1 + words.len() + BECH32_CHECKSUM_LEN;
        if let Some(limit) = options.limit.filter(|&limit| len > limit) {
            return Err(Error::LengthExceedsLimit { len, limit });
        }

        let checksum = Bech32Checksum::new(&prefix, self.variant);
        let digits = checksum.encode(words.to_vec())?.into_iter().map(u32::from).collect();
        let data = self.charset.encode(Data::Digits(digits))?.into_text()?;

        let mut text = String::with_capacity(len);
        text.push_str(&prefix);
        text.push(BECH32_SEPARATOR);
        text.push_str(&data);
        Ok(text)
    }

    /// Decodes a string of at most 90 characters.
    pub fn decode(&self, text: &str) -> Result<Decoded> {
        self.decode_with_options(text, Bech32Options::default())
    }

    pub fn decode_with_options(&self, text: &str, options: Bech32Options) -> Result<Decoded> {
        let len = text.chars().count();
        let max = options.limit.unwrap_or(usize::MAX);
        if len < BECH32_MIN_LEN || len > max {
            return Err(Error::InvalidLength {
                len,
                min: BECH32_MIN_LEN,
                max,
            });
        }

        let lowered = text.to_ascii_lowercase();
        if text != lowered && text != text.to_ascii_uppercase() {
            return Err(Error::MixedCase);
        }

        let separator = match lowered.rfind(BECH32_SEPARATOR) {
            None => return Err(Error::MissingSeparator),
            Some(0) => return Err(Error::EmptyPrefix),
            Some(index) => index,
        };
        let prefix = &lowered[..separator];
        validate_prefix(prefix)?;

        let data = &lowered[separator + 1..];
        // The prefix is ASCII, so byte offsets equal char offsets up to here.
        let data_offset = separator + 1;
        let data_len = data.chars().count();
        if data_len < BECH32_CHECKSUM_LEN {
            return Err(Error::DataTooShort {
                len: data_len,
                min: BECH32_CHECKSUM_LEN,
            });
        }

        let digits = self
            .charset
            .decode(Data::Text(data.to_string()))
            .and_then(Data::into_digits)
            .map_err(|e| e.offset_position(data_offset))?;
        // The charset has 32 symbols, so every digit fits a word.
        let words: Vec<u8> = digits.into_iter().map(|d| d as u8).collect();
        let words = Bech32Checksum::new(prefix, self.variant).decode(words)?;

        Ok(Decoded {
            prefix: prefix.to_string(),
            words,
        })
    }

    /// Like [`decode`](Self::decode), discarding the error.
    pub fn decode_unchecked(&self, text: &str) -> Option<Decoded> {
        self.decode(text).ok()
    }

    /// Packs `bytes` into words and encodes them under `prefix`.
    pub fn encode_from_bytes(&self, prefix: &str, bytes: &[u8]) -> Result<String> {
        self.encode_from_bytes_with_options(prefix, bytes, Bech32Options::default())
    }

    pub fn encode_from_bytes_with_options(
        &self,
        prefix: &str,
        bytes: &[u8],
        options: Bech32Options,
    ) -> Result<String> {
        let words = self.to_words(bytes)?;
        self.encode_with_options(prefix, &words, options)
    }

    /// Decodes a byte-aligned payload. No overall length limit is applied.
    pub fn decode_to_bytes(&self, text: &str) -> Result<DecodedBytes> {
        let Decoded { prefix, words } = self.decode_with_options(text, Bech32Options::unlimited())?;
        let bytes = self.from_words(&words)?;
        Ok(DecodedBytes {
            prefix,
            words,
            bytes,
        })
    }

    /// Converts bytes to 5-bit words, zero-padding the last word.
    pub fn to_words(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let words = self.words.encode(bytes.to_vec())?;
        Ok(words.into_iter().map(|w| w as u8).collect())
    }

    /// Converts 5-bit words back to bytes; padding must be under 5 zero bits.
    pub fn from_words(&self, words: &[u8]) -> Result<Vec<u8>> {
        self.words.decode(words.iter().copied().map(u32::from).collect())
    }

    pub fn from_words_unchecked(&self, words: &[u8]) -> Option<Vec<u8>> {
        self.from_words(words).ok()
    }
}

/// Checks the human-readable part: 1..=83 chars of printable US-ASCII.
fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::EmptyPrefix);
    }
    if !prefix.bytes().all(|b| (33..=126).contains(&b)) {
        return Err(Error::InvalidPrefix {
            prefix: prefix.to_string(),
        });
    }
    if prefix.len() > BECH32_MAX_PREFIX_LEN {
        return Err(Error::PrefixTooLong {
            len: prefix.len(),
            max: BECH32_MAX_PREFIX_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const VALID_BECH32: &[&str] = &[
        "A12UEL5L",
        "a12uel5l",
        "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
        "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
        "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
        "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
        "?1ezyfcl",
    ];

    const VALID_BECH32M: &[&str] = &[
        "A1LQFN3A",
        "a1lqfn3a",
        "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx",
        "?1v759aa",
    ];

    #[test]
    fn test_valid_bech32_vectors() {
        for text in VALID_BECH32 {
            let decoded = BECH32.decode(text).unwrap_or_else(|e| panic!("{text}: {e}"));
            let reencoded = BECH32.encode(&decoded.prefix, &decoded.words).unwrap();
            assert_eq!(reencoded, text.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_valid_bech32m_vectors() {
        for text in VALID_BECH32M {
            let decoded = BECH32M.decode(text).unwrap_or_else(|e| panic!("{text}: {e}"));
            let reencoded = BECH32M.encode(&decoded.prefix, &decoded.words).unwrap();
            assert_eq!(reencoded, text.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_uppercase_vector() {
        let decoded = BECH32.decode("A12UEL5L").unwrap();
        assert_eq!(decoded, Decoded { prefix: "a".to_string(), words: vec![] });
        // Decoding normalizes case; encoding the result yields different text.
        assert_ne!(BECH32.encode(&decoded.prefix, &decoded.words).unwrap(), "A12UEL5L");
    }

    #[test]
    fn test_charset_order_vector() {
        let decoded = BECH32.decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
        assert_eq!(decoded.prefix, "abcdef");
        assert_eq!(decoded.words, (0u8..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_variants_reject_each_other() {
        for text in VALID_BECH32M {
            let err = BECH32.decode(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Checksum, "{text}");
        }
        for text in VALID_BECH32 {
            let err = BECH32M.decode(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Checksum, "{text}");
        }
    }

    #[test]
    fn test_invalid_strings() {
        // Character outside the charset
        assert_eq!(
            BECH32.decode("x1b4n0q5v"),
            Err(Error::InvalidSymbol { symbol: 'b', position: 2 })
        );
        // Checksum computed over the uppercase prefix
        assert_eq!(BECH32.decode("A1G7SGD8").unwrap_err().kind(), ErrorKind::Checksum);
        // Empty prefix
        assert_eq!(BECH32.decode("10a06t8"), Err(Error::EmptyPrefix));
        assert_eq!(BECH32.decode("1qzzfhee"), Err(Error::EmptyPrefix));
        // Data part shorter than the checksum
        assert_eq!(BECH32.decode("li1dgmt3"), Err(Error::DataTooShort { len: 5, min: 6 }));
        // No separator
        assert_eq!(BECH32.decode("pzry9x0s0muk"), Err(Error::MissingSeparator));
        // Prefix character out of range
        assert!(matches!(
            BECH32.decode("\u{7f}1axkwrx"),
            Err(Error::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_mixed_case_rejected() {
        assert_eq!(BECH32.decode("A12uEL5L"), Err(Error::MixedCase));
    }

    #[test]
    fn test_length_limits() {
        let too_long = "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx";
        assert!(matches!(BECH32.decode(too_long), Err(Error::InvalidLength { len: 91, .. })));
        assert!(matches!(BECH32.decode("a1qqqq"), Err(Error::InvalidLength { len: 6, .. })));

        let words = vec![0u8; 90];
        assert_eq!(
            BECH32.encode("a", &words),
            Err(Error::LengthExceedsLimit { len: 98, limit: 90 })
        );
        let text = BECH32
            .encode_with_options("a", &words, Bech32Options::unlimited())
            .unwrap();
        let decoded = BECH32.decode_with_options(&text, Bech32Options::unlimited()).unwrap();
        assert_eq!(decoded.words, words);
    }

    #[test]
    fn test_encode_rejects_bad_input() {
        assert_eq!(BECH32.encode("", &[]), Err(Error::EmptyPrefix));
        assert_eq!(
            BECH32.encode("a", &[32]),
            Err(Error::DigitOutOfRange { digit: 32, base: 32 })
        );
        assert!(matches!(BECH32.encode("a b", &[]), Err(Error::InvalidPrefix { .. })));
    }

    #[test]
    fn test_empty_data_encodings() {
        assert_eq!(BECH32.encode("a", &[]).unwrap(), "a12uel5l");
        assert_eq!(BECH32M.encode("a", &[]).unwrap(), "a1lqfn3a");
        assert_eq!(BECH32.encode("A", &[]).unwrap(), "a12uel5l");
    }

    #[test]
    fn test_bytes_roundtrip() {
        let bytes = [0x00, 0x14, 0x75, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96];
        let text = BECH32.encode_from_bytes("test", &bytes).unwrap();
        let decoded = BECH32.decode_to_bytes(&text).unwrap();
        assert_eq!(decoded.prefix, "test");
        assert_eq!(decoded.bytes, bytes);
        assert_eq!(decoded.words, BECH32.to_words(&bytes).unwrap());
    }

    #[test]
    fn test_words_conversion() {
        assert_eq!(BECH32.to_words(&[0xff]).unwrap(), vec![31, 28]);
        assert_eq!(BECH32.from_words(&[31, 28]).unwrap(), vec![0xff]);
        assert!(BECH32.from_words(&[31, 29]).is_err());
        assert_eq!(BECH32.from_words_unchecked(&[31, 29]), None);
        assert_eq!(BECH32.decode_unchecked("a12uel5x"), None);
    }

    #[test]
    fn test_polymod_of_valid_string() {
        let mut values = expand_prefix("a");
        values.extend_from_slice(&[10, 28, 25, 31, 20, 31]); // "2uel5l"
        assert_eq!(polymod(&values), BECH32_CONST);
    }
}

//! Bit-packed encodings: base16, base32 and base64 families (RFC 4648),
//! lowercase hex and Crockford's base32.

use lazy_static::lazy_static;

use crate::coder::{Alphabet, Join, Normalize, Padding, Radix2, Stage};
use crate::encodings::{Encoding, PRESET};
use crate::error::{Error, Result};

pub const BASE16_ALPHABET: &str = "0123456789ABCDEF";
pub const HEX_ALPHABET: &str = "0123456789abcdef";
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const BASE32_HEX_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
pub const BASE32_CROCKFORD_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub const BASE64_URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const PAD: char = '=';

/// Builds `radix2(bits) -> alphabet -> [padding] -> join -> [normalize]`.
pub fn bit_packed(
    name: &'static str,
    bits: u32,
    symbols: &str,
    pad: Option<char>,
    normalize: Option<Normalize>,
) -> Result<Encoding> {
    let mut stages = vec![Stage::from(Radix2::new(bits)?), Alphabet::new(symbols)?.into()];
    if let Some(pad) = pad {
        stages.push(Padding::new(bits, pad)?.into());
    }
    stages.push(Join::concat().into());
    if let Some(normalize) = normalize {
        stages.push(normalize.into());
    }
    Encoding::new(name, stages)
}

/// Lowercases hex input and rejects odd lengths.
fn normalize_hex(text: &str) -> Result<String> {
    let len = text.chars().count();
    if len % 2 != 0 {
        return Err(Error::OddHexLength { len });
    }
    Ok(text.to_lowercase())
}

/// Uppercases Crockford input and maps look-alikes: `O` to `0`, `I`/`L` to `1`.
fn normalize_crockford(text: &str) -> Result<String> {
    Ok(text
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'O' => '0',
            'I' | 'L' => '1',
            other => other,
        })
        .collect())
}

lazy_static! {
    pub static ref BASE16: Encoding =
        bit_packed("base16", 4, BASE16_ALPHABET, None, None).expect(PRESET);
    pub static ref HEX: Encoding =
        bit_packed("hex", 4, HEX_ALPHABET, None, Some(Normalize::new(normalize_hex))).expect(PRESET);
    pub static ref BASE32: Encoding =
        bit_packed("base32", 5, BASE32_ALPHABET, Some(PAD), None).expect(PRESET);
    pub static ref BASE32_NOPAD: Encoding =
        bit_packed("base32nopad", 5, BASE32_ALPHABET, None, None).expect(PRESET);
    pub static ref BASE32_HEX: Encoding =
        bit_packed("base32hex", 5, BASE32_HEX_ALPHABET, Some(PAD), None).expect(PRESET);
    pub static ref BASE32_HEX_NOPAD: Encoding =
        bit_packed("base32hexnopad", 5, BASE32_HEX_ALPHABET, None, None).expect(PRESET);
    pub static ref BASE32_CROCKFORD: Encoding = bit_packed(
        "base32crockford",
        5,
        BASE32_CROCKFORD_ALPHABET,
        None,
        Some(Normalize::new(normalize_crockford)),
    )
    .expect(PRESET);
    pub static ref BASE64: Encoding =
        bit_packed("base64", 6, BASE64_ALPHABET, Some(PAD), None).expect(PRESET);
    pub static ref BASE64_NOPAD: Encoding =
        bit_packed("base64nopad", 6, BASE64_ALPHABET, None, None).expect(PRESET);
    pub static ref BASE64_URL: Encoding =
        bit_packed("base64url", 6, BASE64_URL_ALPHABET, Some(PAD), None).expect(PRESET);
    pub static ref BASE64_URL_NOPAD: Encoding =
        bit_packed("base64urlnopad", 6, BASE64_URL_ALPHABET, None, None).expect(PRESET);
}

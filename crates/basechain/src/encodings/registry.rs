//! Dispatch by encoding name.
//!
//! ```rust
//! use basechain::encodings::{decode_from, encode_to};
//!
//! let text = encode_to("base32crockford", b"hi").unwrap();
//! assert_eq!(decode_from("base32crockford", &text).unwrap(), b"hi");
//! assert!(encode_to("base65", b"hi").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::bech32::{BECH32, BECH32M, Bech32, Bech32Options, Variant};
use crate::encodings::{
    BASE16, BASE32, BASE32_CROCKFORD, BASE32_HEX, BASE32_HEX_NOPAD, BASE32_NOPAD, BASE58,
    BASE58_FLICKR, BASE58_XMR, BASE58_XRP, BASE64, BASE64_NOPAD, BASE64_URL, BASE64_URL_NOPAD,
    HEX, TextEncoding, UTF8,
};
use crate::error::{Error, Result};
use crate::limits::GENERIC_BECH32_PREFIX;

/// Every encoding reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingName {
    Base16,
    Hex,
    Base32,
    Base32NoPad,
    Base32Hex,
    Base32HexNoPad,
    Base32Crockford,
    Base64,
    Base64NoPad,
    Base64Url,
    Base64UrlNoPad,
    Base58,
    Base58Flickr,
    Base58Xmr,
    Base58Xrp,
    Bech32,
    Bech32m,
    Utf8,
}

impl EncodingName {
    pub const ALL: [EncodingName; 18] = [
        EncodingName::Base16,
        EncodingName::Hex,
        EncodingName::Base32,
        EncodingName::Base32NoPad,
        EncodingName::Base32Hex,
        EncodingName::Base32HexNoPad,
        EncodingName::Base32Crockford,
        EncodingName::Base64,
        EncodingName::Base64NoPad,
        EncodingName::Base64Url,
        EncodingName::Base64UrlNoPad,
        EncodingName::Base58,
        EncodingName::Base58Flickr,
        EncodingName::Base58Xmr,
        EncodingName::Base58Xrp,
        EncodingName::Bech32,
        EncodingName::Bech32m,
        EncodingName::Utf8,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingName::Base16 => "base16",
            EncodingName::Hex => "hex",
            EncodingName::Base32 => "base32",
            EncodingName::Base32NoPad => "base32nopad",
            EncodingName::Base32Hex => "base32hex",
            EncodingName::Base32HexNoPad => "base32hexnopad",
            EncodingName::Base32Crockford => "base32crockford",
            EncodingName::Base64 => "base64",
            EncodingName::Base64NoPad => "base64nopad",
            EncodingName::Base64Url => "base64url",
            EncodingName::Base64UrlNoPad => "base64urlnopad",
            EncodingName::Base58 => "base58",
            EncodingName::Base58Flickr => "base58flickr",
            EncodingName::Base58Xmr => "base58xmr",
            EncodingName::Base58Xrp => "base58xrp",
            EncodingName::Bech32 => "bech32",
            EncodingName::Bech32m => "bech32m",
            EncodingName::Utf8 => "utf8",
        }
    }

    /// Returns the codec registered under this name.
    pub fn encoding(&self) -> &'static dyn TextEncoding {
        match self {
            EncodingName::Base16 => &*BASE16,
            EncodingName::Hex => &*HEX,
            EncodingName::Base32 => &*BASE32,
            EncodingName::Base32NoPad => &*BASE32_NOPAD,
            EncodingName::Base32Hex => &*BASE32_HEX,
            EncodingName::Base32HexNoPad => &*BASE32_HEX_NOPAD,
            EncodingName::Base32Crockford => &*BASE32_CROCKFORD,
            EncodingName::Base64 => &*BASE64,
            EncodingName::Base64NoPad => &*BASE64_NOPAD,
            EncodingName::Base64Url => &*BASE64_URL,
            EncodingName::Base64UrlNoPad => &*BASE64_URL_NOPAD,
            EncodingName::Base58 => &*BASE58,
            EncodingName::Base58Flickr => &*BASE58_FLICKR,
            EncodingName::Base58Xmr => &BASE58_XMR,
            EncodingName::Base58Xrp => &*BASE58_XRP,
            EncodingName::Bech32 => &BECH32_BYTES,
            EncodingName::Bech32m => &BECH32M_BYTES,
            EncodingName::Utf8 => &UTF8,
        }
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        EncodingName::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == name)
            .ok_or_else(|| Error::UnknownEncoding {
                name: name.to_string(),
            })
    }
}

/// Bech32 as a plain byte codec: bytes are packed into words under a fixed
/// prefix, with no overall length limit.
///
/// Decoding requires the same prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixedBech32 {
    variant: Variant,
    prefix: &'static str,
}

pub static BECH32_BYTES: PrefixedBech32 = PrefixedBech32::new(Variant::Bech32, GENERIC_BECH32_PREFIX);
pub static BECH32M_BYTES: PrefixedBech32 =
    PrefixedBech32::new(Variant::Bech32m, GENERIC_BECH32_PREFIX);

impl PrefixedBech32 {
    /// `prefix` should be lowercase; decoded prefixes are compared lowercased.
    pub const fn new(variant: Variant, prefix: &'static str) -> Self {
        Self { variant, prefix }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn codec(&self) -> &'static Bech32 {
        match self.variant {
            Variant::Bech32 => &BECH32,
            Variant::Bech32m => &BECH32M,
        }
    }
}

impl TextEncoding for PrefixedBech32 {
    fn name(&self) -> &str {
        match self.variant {
            Variant::Bech32 => "bech32",
            Variant::Bech32m => "bech32m",
        }
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        self.codec()
            .encode_from_bytes_with_options(self.prefix, bytes, Bech32Options::unlimited())
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let decoded = self.codec().decode_to_bytes(text)?;
        if decoded.prefix != self.prefix {
            return Err(Error::InvalidPrefix {
                prefix: decoded.prefix,
            });
        }
        Ok(decoded.bytes)
    }
}

/// Encodes `bytes` with the encoding registered as `name`.
pub fn encode_to(name: &str, bytes: &[u8]) -> Result<String> {
    let name: EncodingName = name.parse()?;
    tracing::debug!(encoding = %name, len = bytes.len(), "encode");
    name.encoding().encode(bytes)
}

/// Decodes `text` with the encoding registered as `name`.
pub fn decode_from(name: &str, text: &str) -> Result<Vec<u8>> {
    let name: EncodingName = name.parse()?;
    tracing::debug!(encoding = %name, len = text.len(), "decode");
    name.encoding().decode(text)
}

/// Alias of [`encode_to`].
pub fn bytes_to_string(name: &str, bytes: &[u8]) -> Result<String> {
    encode_to(name, bytes)
}

/// Alias of [`decode_from`].
pub fn string_to_bytes(name: &str, text: &str) -> Result<Vec<u8>> {
    decode_from(name, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_names_roundtrip() {
        for name in EncodingName::ALL {
            let parsed: EncodingName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
            assert_eq!(name.encoding().name(), name.as_str());
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = encode_to("base65", b"x").unwrap_err();
        assert_eq!(err, Error::UnknownEncoding { name: "base65".to_string() });
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!("Base64".parse::<EncodingName>().is_err());
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(encode_to("base64", b"foobar").unwrap(), "Zm9vYmFy");
        assert_eq!(decode_from("base16", "666F6F").unwrap(), b"foo");
        assert_eq!(bytes_to_string("hex", &[0xca, 0xfe]).unwrap(), "cafe");
        assert_eq!(string_to_bytes("utf8", "hi").unwrap(), b"hi");
    }

    #[test]
    fn test_bech32_bytes() {
        let bytes = [7u8; 64];
        let text = encode_to("bech32m", &bytes).unwrap();
        assert!(text.starts_with("data1"));
        assert!(text.len() > 90);
        assert_eq!(decode_from("bech32m", &text).unwrap(), bytes);
        assert_eq!(decode_from("bech32", &text).unwrap_err().kind(), ErrorKind::Checksum);
    }

    #[test]
    fn test_bech32_bytes_prefix_mismatch() {
        let text = BECH32.encode_from_bytes("other", &[1, 2, 3]).unwrap();
        assert_eq!(
            decode_from("bech32", &text),
            Err(Error::InvalidPrefix { prefix: "other".to_string() })
        );
    }
}

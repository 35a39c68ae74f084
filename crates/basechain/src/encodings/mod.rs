//! Named byte <-> text encodings assembled from coder chains.
//!
//! - [`rfc4648`]: base16, hex, base32 (+hex, crockford), base64 (+url)
//! - [`base58`]: base58 alphabets, base58xmr blocks, base58check
//! - [`registry`]: dispatch by encoding name

pub mod base58;
pub mod registry;
pub mod rfc4648;

pub use base58::{BASE58, BASE58_FLICKR, BASE58_XMR, BASE58_XRP, Base58Check, Base58Xmr};
pub use registry::{
    BECH32_BYTES, BECH32M_BYTES, EncodingName, PrefixedBech32, bytes_to_string, decode_from,
    encode_to, string_to_bytes,
};
pub use rfc4648::{
    BASE16, BASE32, BASE32_CROCKFORD, BASE32_HEX, BASE32_HEX_NOPAD, BASE32_NOPAD, BASE64,
    BASE64_NOPAD, BASE64_URL, BASE64_URL_NOPAD, HEX,
};

use crate::coder::{Chain, Coder, Data, DataKind, Stage};
use crate::error::{Error, Result};

/// A codec between arbitrary bytes and text.
pub trait TextEncoding: Send + Sync {
    /// Name under which the encoding is registered.
    fn name(&self) -> &str;

    fn encode(&self, bytes: &[u8]) -> Result<String>;

    fn decode(&self, text: &str) -> Result<Vec<u8>>;

    /// Encodes the UTF-8 bytes of `text`.
    fn encode_str(&self, text: &str) -> Result<String> {
        self.encode(text.as_bytes())
    }

    /// Decodes `text` and interprets the bytes as UTF-8.
    fn decode_to_string(&self, text: &str) -> Result<String> {
        String::from_utf8(self.decode(text)?).map_err(|_| Error::InvalidUtf8)
    }
}

/// A named chain from bytes to text.
#[derive(Debug, Clone)]
pub struct Encoding {
    name: &'static str,
    chain: Chain,
}

impl Encoding {
    /// Builds an encoding; the chain must take bytes and produce text.
    pub fn new<I>(name: &'static str, stages: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Stage>,
    {
        let chain = Chain::new(stages)?;
        if chain.input_kind() != DataKind::Bytes {
            return Err(Error::StageMismatch {
                index: 0,
                expected: DataKind::Bytes,
                found: chain.input_kind(),
            });
        }
        if chain.output_kind() != DataKind::Text {
            return Err(Error::StageMismatch {
                index: chain.stages().len(),
                expected: chain.output_kind(),
                found: DataKind::Text,
            });
        }
        Ok(Self { name, chain })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }
}

impl TextEncoding for Encoding {
    fn name(&self) -> &str {
        self.name
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        self.chain.encode(Data::Bytes(bytes.to_vec()))?.into_text()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        self.chain.decode(Data::Text(text.to_string()))?.into_bytes()
    }
}

/// Bytes <-> UTF-8 text. Encoding fails on invalid UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

pub static UTF8: Utf8 = Utf8;

impl TextEncoding for Utf8 {
    fn name(&self) -> &str {
        "utf8"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}

/// Message used when a built-in preset fails to build, which its constant
/// configuration rules out.
pub(crate) const PRESET: &str = "built-in encoding configuration is valid";

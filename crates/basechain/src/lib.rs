//! Composable base encodings built from invertible coder chains.
//!
//! Instead of one hand-written function per encoding, every codec in this
//! crate is a [`Chain`] of small invertible stages. Encoding runs the stages
//! left-to-right; decoding runs their inverses right-to-left.
//!
//! # Quick Start
//!
//! ```rust
//! use basechain::encodings::{BASE58, BASE64, TextEncoding};
//!
//! let text = BASE64.encode(b"foobar").unwrap();
//! assert_eq!(text, "Zm9vYmFy");
//! assert_eq!(BASE64.decode(&text).unwrap(), b"foobar");
//!
//! // Leading zero bytes survive the base58 bignum conversion.
//! let text = BASE58.encode(&[0, 0, 1, 2, 3]).unwrap();
//! assert_eq!(BASE58.decode(&text).unwrap(), vec![0, 0, 1, 2, 3]);
//! ```
//!
//! Building a codec from stages:
//!
//! ```rust
//! use basechain::coder::{Alphabet, Join, Padding, Radix2, Stage};
//! use basechain::encodings::{Encoding, TextEncoding};
//!
//! let base32 = Encoding::new(
//!     "base32",
//!     [
//!         Stage::from(Radix2::new(5)?),
//!         Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567")?.into(),
//!         Padding::new(5, '=')?.into(),
//!         Join::concat().into(),
//!     ],
//! )?;
//! assert_eq!(base32.encode(b"foo")?, "MZXW6===");
//! # Ok::<(), basechain::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`coder`]: Stage primitives (alphabet, radix, radix2, checksum, padding, join) and [`Chain`]
//! - [`bech32`]: Bech32/bech32m with prefix handling and the BCH checksum
//! - [`encodings`]: Named presets and dispatch by name
//! - [`error`]: Error types
//! - [`limits`]: Fixed lengths and constants
//!
//! # Untrusted Input
//!
//! Base58 decoding is quadratic in the input length and the library enforces
//! no size limit on it. Bound the length of untrusted input before decoding
//! with a non-power-of-two base.

pub mod bech32;
pub mod coder;
pub mod encodings;
pub mod error;
pub mod limits;

pub use bech32::{BECH32, BECH32M, Bech32, Bech32Options, Variant};
pub use coder::{Chain, Coder, Data, DataKind, Stage};
pub use encodings::{
    EncodingName, TextEncoding, bytes_to_string, decode_from, encode_to, string_to_bytes,
};
pub use error::{Error, ErrorKind, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

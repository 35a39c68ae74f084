//! Fixed limits and constants of the supported encodings.

/// Default maximum length of a bech32/bech32m string.
pub const BECH32_MAX_LEN: usize = 90;

/// Minimum length of a bech32 string: one prefix char, separator, checksum.
pub const BECH32_MIN_LEN: usize = 8;

/// Maximum length of the human-readable part.
pub const BECH32_MAX_PREFIX_LEN: usize = 83;

/// Number of 5-bit checksum words appended by bech32.
pub const BECH32_CHECKSUM_LEN: usize = 6;

/// Separator between the human-readable part and the data part.
pub const BECH32_SEPARATOR: char = '1';

/// Polymod residue of a valid bech32 string (BIP-173).
pub const BECH32_CONST: u32 = 1;

/// Polymod residue of a valid bech32m string (BIP-350).
pub const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Human-readable part used when bech32 is reached through the name registry.
pub const GENERIC_BECH32_PREFIX: &str = "data";

/// Number of bytes per base58xmr block.
pub const XMR_BLOCK_SIZE: usize = 8;

/// Encoded width of a full base58xmr block.
pub const XMR_ENCODED_BLOCK_SIZE: usize = 11;

/// Encoded width of a base58xmr block, indexed by block length in bytes.
pub const XMR_BLOCK_LEN: [usize; XMR_BLOCK_SIZE + 1] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

/// Number of checksum bytes appended by base58check.
pub const BASE58CHECK_CHECKSUM_LEN: usize = 4;

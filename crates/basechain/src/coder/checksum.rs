//! Appended checksum over a byte payload.
//!
//! The checksum function is supplied by the caller; this crate never picks a
//! hash algorithm. Bech32's polynomial checksum lives in [`crate::bech32`].

use std::fmt;
use std::sync::Arc;

use crate::coder::Coder;
use crate::error::{Error, Result};

/// Caller-supplied one-way function producing at least `size` bytes.
pub type HashFn = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// Appends the first `size` bytes of `hash(payload)` on encode; verifies and
/// strips them on decode.
#[derive(Clone)]
pub struct Checksum {
    size: usize,
    hash: HashFn,
}

impl Checksum {
    pub fn new<F>(size: usize, hash: F) -> Result<Self>
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        if size == 0 {
            return Err(Error::InvalidChecksumSize);
        }
        Ok(Self {
            size,
            hash: Arc::new(hash),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn compute(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let mut digest = (self.hash)(payload);
        if digest.len() < self.size {
            return Err(Error::ShortHashOutput {
                len: digest.len(),
                size: self.size,
            });
        }
        digest.truncate(self.size);
        Ok(digest)
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checksum").field("size", &self.size).finish_non_exhaustive()
    }
}

impl Coder for Checksum {
    type Decoded = Vec<u8>;
    type Encoded = Vec<u8>;

    fn encode(&self, mut payload: Vec<u8>) -> Result<Vec<u8>> {
        let sum = self.compute(&payload)?;
        payload.extend_from_slice(&sum);
        Ok(payload)
    }

    fn decode(&self, mut data: Vec<u8>) -> Result<Vec<u8>> {
        if data.len() < self.size {
            return Err(Error::MissingChecksum {
                len: data.len(),
                size: self.size,
            });
        }
        let received = data.split_off(data.len() - self.size);
        if self.compute(&data)? != received {
            tracing::debug!(size = self.size, "checksum mismatch");
            return Err(Error::ChecksumMismatch);
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_sum(data: &[u8]) -> Vec<u8> {
        let folded = data.iter().fold(0u8, |acc, b| acc ^ b);
        vec![folded, !folded]
    }

    #[test]
    fn test_checksum_roundtrip() {
        let checksum = Checksum::new(2, xor_sum).unwrap();
        let encoded = checksum.encode(vec![1, 2, 4]).unwrap();
        assert_eq!(encoded, vec![1, 2, 4, 7, !7]);
        assert_eq!(checksum.decode(encoded).unwrap(), vec![1, 2, 4]);
    }

    #[test]
    fn test_truncates_digest() {
        let checksum = Checksum::new(1, xor_sum).unwrap();
        assert_eq!(checksum.encode(vec![3]).unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_mismatch_rejected() {
        let checksum = Checksum::new(2, xor_sum).unwrap();
        let result = checksum.decode(vec![1, 2, 4, 6, !7]);
        assert_eq!(result, Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_short_input_rejected() {
        let checksum = Checksum::new(2, xor_sum).unwrap();
        assert_eq!(
            checksum.decode(vec![1]),
            Err(Error::MissingChecksum { len: 1, size: 2 })
        );
    }

    #[test]
    fn test_empty_payload() {
        let checksum = Checksum::new(2, xor_sum).unwrap();
        let encoded = checksum.encode(Vec::new()).unwrap();
        assert_eq!(encoded, vec![0, 0xff]);
        assert!(checksum.decode(encoded).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(Checksum::new(0, xor_sum), Err(Error::InvalidChecksumSize)));
        let checksum = Checksum::new(4, xor_sum).unwrap();
        assert_eq!(
            checksum.encode(vec![1]),
            Err(Error::ShortHashOutput { len: 2, size: 4 })
        );
    }
}

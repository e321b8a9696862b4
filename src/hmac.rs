//! HMAC-SHA256 (RFC 2104).

use core::str::FromStr;

use crate::encoding::{encode, Encoded, Encoding};
use crate::error::Result;
use crate::hash::{Algorithm, Hash};
use crate::input::Value;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A key normalized to the 64-byte block size.
#[derive(Clone)]
pub struct KeyBlock([u8; 64]);

impl KeyBlock {
    /// Keys longer than a block are replaced by their SHA-256 digest; the
    /// result is zero-padded on the right.
    pub fn new(k: &[u8]) -> KeyBlock {
        let mut hk = [0u8; 32];
        let k2 = if k.len() > 64 {
            log::debug!("hmac: hashing {}-byte key down to 32 bytes", k.len());
            hk.copy_from_slice(&Hash::hash(k));
            &hk[..]
        } else {
            k
        };
        let mut block = [0u8; 64];
        block[..k2.len()].copy_from_slice(k2);
        KeyBlock(block)
    }

    fn xor(&self, pad: u8) -> [u8; 64] {
        let mut padded = self.0;
        for p in padded.iter_mut() {
            *p ^= pad;
        }
        padded
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// An HMAC-SHA256 context.
///
/// The inner hash is seeded with the inner pad at construction; `update`
/// appends message chunks to it.
#[derive(Clone)]
pub struct HMAC {
    ih: Hash,
    opad: [u8; 64],
}

impl HMAC {
    /// Compute HMAC-SHA256(`input`, `k`)
    pub fn mac(input: impl AsRef<[u8]>, k: impl AsRef<[u8]>) -> [u8; 32] {
        let mut hmac = HMAC::with_key_block(&KeyBlock::new(k.as_ref()));
        hmac.ih._update(input);
        hmac.finalize()
    }

    /// Creates a context keyed with any text or byte value.
    pub fn new<'a>(key: impl Into<Value<'a>>) -> Result<HMAC> {
        let key = key.into().as_bytes()?;
        Ok(HMAC::with_key_block(&KeyBlock::new(key)))
    }

    pub fn with_key_block(key: &KeyBlock) -> HMAC {
        let mut ih = Hash::new();
        ih._update(key.xor(IPAD));
        HMAC {
            ih,
            opad: key.xor(OPAD),
        }
    }

    /// Absorb content
    pub fn update<'a>(mut self, data: impl Into<Value<'a>>) -> Result<Self> {
        self.ih = self.ih.update(data)?;
        Ok(self)
    }

    /// Compute HMAC-SHA256 over the entire input
    pub fn finalize(self) -> [u8; 32] {
        let inner = self.ih.finalize();
        let mut oh = Hash::new();
        oh._update(self.opad);
        oh._update(inner);
        oh.finalize()
    }

    /// Compute HMAC-SHA256 over the entire input and encode it.
    pub fn digest(self, encoding: Option<&str>) -> Result<Encoded> {
        let encoding = encoding.map(Encoding::from_str).transpose()?;
        Ok(encode(&self.finalize(), encoding))
    }
}

/// Creates an HMAC context; `algorithm` must name SHA-256.
pub fn create_hmac<'a>(algorithm: &str, key: impl Into<Value<'a>>) -> Result<HMAC> {
    match algorithm.parse::<Algorithm>()? {
        Algorithm::Sha256 => HMAC::new(key),
    }
}

//! The streaming SHA-256 accumulator.

use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::compress::State;
use crate::encoding::{encode, Encoded, Encoding};
use crate::error::{Error, Result};
use crate::input::{ByteSequence, Value};
use crate::padding::pad;

/// Hash algorithms the engine can be asked for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha256,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("sha256") {
            Ok(Algorithm::Sha256)
        } else {
            Err(Error::UnsupportedAlgorithm(name.to_string()))
        }
    }
}

/// Buffered input chunks, hashed only at finalization.
#[derive(Clone, Debug, Default)]
pub(crate) struct ChunkList(Vec<ByteSequence>);

impl ChunkList {
    pub(crate) fn push(&mut self, chunk: ByteSequence) {
        self.0.push(chunk)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// The whole message. Zero or one chunk is borrowed as-is.
    pub(crate) fn concat(&self) -> Cow<'_, [u8]> {
        match self.0.as_slice() {
            [] => Cow::Borrowed(&[]),
            [only] => Cow::Borrowed(&only[..]),
            chunks => {
                let total = chunks.iter().map(|c| c.len()).sum();
                let mut message = Vec::with_capacity(total);
                for c in chunks {
                    message.extend_from_slice(c);
                }
                Cow::Owned(message)
            }
        }
    }
}

/// A SHA-256 context.
///
/// `update` only records its input; padding and compression run when the
/// context is consumed by `digest` or `finalize`.
#[derive(Clone, Debug, Default)]
pub struct Hash {
    chunks: ChunkList,
}

impl Hash {
    pub fn new() -> Hash {
        Hash {
            chunks: ChunkList::default(),
        }
    }

    /// Creates a context for the algorithm named `algorithm` (case-insensitive).
    pub fn with_algorithm(algorithm: &str) -> Result<Hash> {
        match algorithm.parse::<Algorithm>()? {
            Algorithm::Sha256 => Ok(Hash::new()),
        }
    }

    pub(crate) fn _update(&mut self, input: impl AsRef<[u8]>) {
        self.chunks.push(ByteSequence::from(input.as_ref()))
    }

    /// Appends an already owned chunk without copying it.
    pub(crate) fn _update_chunk(&mut self, chunk: ByteSequence) {
        self.chunks.push(chunk)
    }

    #[cfg(test)]
    pub(crate) fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Absorb content
    pub fn update<'a>(mut self, data: impl Into<Value<'a>>) -> Result<Self> {
        let chunk = ByteSequence::try_from(data.into())?;
        self._update_chunk(chunk);
        Ok(self)
    }

    /// Compute SHA256(absorbed content)
    pub fn finalize(self) -> [u8; 32] {
        let message = self.chunks.concat();
        let padded = pad(&message);
        let mut state = State::new();
        for block in padded.blocks() {
            state.compress(block);
        }
        log::trace!(
            "sha256: finalized {} bytes in {} blocks",
            message.len(),
            padded.len() / 64
        );
        state.store()
    }

    /// Compute SHA256(absorbed content) and encode it.
    ///
    /// `encoding` is one of `"hex"`, `"base64"`, `"latin1"` or `"binary"`;
    /// `None` returns the raw 32 bytes.
    pub fn digest(self, encoding: Option<&str>) -> Result<Encoded> {
        let encoding = encoding.map(Encoding::from_str).transpose()?;
        Ok(encode(&self.finalize(), encoding))
    }

    /// Compute SHA256(`input`)
    pub fn hash(input: &[u8]) -> [u8; 32] {
        let mut h = Hash::new();
        h._update(input);
        h.finalize()
    }
}

/// Creates a hash context; `algorithm` must name SHA-256.
pub fn create_hash(algorithm: &str) -> Result<Hash> {
    Hash::with_algorithm(algorithm)
}

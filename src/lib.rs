//! A small, self-contained SHA256 and HMAC-SHA256 engine.
//!
//! Contexts buffer their input across any number of `update` calls and are
//! consumed by a single `digest`, which returns the raw 32 bytes or a
//! `hex`, `base64`, `latin1` or `binary` string.
//!
//! ```
//! use chat_sha256::{create_hash, create_hmac};
//!
//! let hex = create_hash("sha256")?.update("ab")?.update("c")?.digest(Some("hex"))?;
//! assert_eq!(
//!     hex.as_str(),
//!     Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
//! );
//!
//! let tag = create_hmac("SHA256", "key")?.update(&b"payload"[..])?.digest(None)?;
//! assert_eq!(tag.as_bytes().map(|b| b.len()), Some(32));
//! # Ok::<(), chat_sha256::Error>(())
//! ```

#![no_std]
#![allow(
    non_snake_case,
    clippy::cast_lossless,
    clippy::many_single_char_names,
    clippy::unreadable_literal
)]

extern crate alloc;

mod compress;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod hmac;
pub mod host;
pub mod input;
pub mod padding;

pub use encoding::{Encoded, Encoding};
pub use error::{Error, Result};
pub use hash::{create_hash, Algorithm, Hash};
pub use hmac::{create_hmac, KeyBlock, HMAC};
pub use host::{buffer_global_installed, install_buffer_global};
pub use input::{ByteSequence, Value};

/// Wrapped `Hash` type for the `Digest` trait.
#[cfg(feature = "traits010")]
pub type WrappedHash = digest010::core_api::CoreWrapper<Hash>;

#[cfg(feature = "traits010")]
mod digest_trait010 {
    use alloc::vec::Vec;
    use core::fmt;

    use digest010::{
        block_buffer::Eager,
        const_oid::{AssociatedOid, ObjectIdentifier},
        consts::{U32, U64},
        core_api::{
            AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, FixedOutputCore,
            OutputSizeUser, Reset, UpdateCore,
        },
        FixedOutput, FixedOutputReset, HashMarker, Output, Update,
    };

    use super::Hash;

    impl AssociatedOid for Hash {
        const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");
    }

    impl AlgorithmName for Hash {
        fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Sha256")
        }
    }

    impl HashMarker for Hash {}

    impl BufferKindUser for Hash {
        type BufferKind = Eager;
    }

    impl BlockSizeUser for Hash {
        type BlockSize = U64;
    }

    impl OutputSizeUser for Hash {
        type OutputSize = U32;
    }

    impl UpdateCore for Hash {
        #[inline]
        fn update_blocks(&mut self, blocks: &[Block<Self>]) {
            if blocks.is_empty() {
                return;
            }
            let mut chunk = Vec::with_capacity(blocks.len() * 64);
            for block in blocks {
                chunk.extend_from_slice(block);
            }
            self._update_chunk(chunk.into());
        }
    }

    impl Update for Hash {
        #[inline]
        fn update(&mut self, data: &[u8]) {
            self._update(data);
        }
    }

    impl FixedOutputCore for Hash {
        fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
            self._update(buffer.get_data());
            out.copy_from_slice(&core::mem::take(self).finalize());
        }
    }

    impl FixedOutput for Hash {
        fn finalize_into(self, out: &mut Output<Self>) {
            out.copy_from_slice(&self.finalize());
        }
    }

    impl Reset for Hash {
        fn reset(&mut self) {
            *self = Self::new()
        }
    }

    impl FixedOutputReset for Hash {
        fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
            out.copy_from_slice(&core::mem::take(self).finalize());
        }
    }

}

#[cfg(feature = "traits09")]
mod digest_trait09 {
    use digest09::consts::{U32, U64};
    use digest09::{BlockInput, FixedOutputDirty, Output, Reset, Update};

    use super::Hash;

    impl BlockInput for Hash {
        type BlockSize = U64;
    }

    impl Update for Hash {
        fn update(&mut self, input: impl AsRef<[u8]>) {
            self._update(input)
        }
    }

    impl FixedOutputDirty for Hash {
        type OutputSize = U32;

        fn finalize_into_dirty(&mut self, out: &mut Output<Self>) {
            out.copy_from_slice(&core::mem::take(self).finalize());
        }
    }

    impl Reset for Hash {
        fn reset(&mut self) {
            *self = Self::new()
        }
    }
}

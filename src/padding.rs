//! SHA-256 message padding.
//!
//! A message is followed by `0x80`, zero bytes up to 56 mod 64, and its length
//! in bits as a big-endian `u64`. Only the trailing partial block is copied;
//! the full blocks in front of it are borrowed from the message.

use alloc::vec::Vec;

pub const BLOCK_LEN: usize = 64;

/// A padded message: whole blocks of the original message plus a one- or
/// two-block tail holding the remainder, the `0x80` marker and the length.
pub struct Padded<'a> {
    body: &'a [u8],
    tail: [u8; 2 * BLOCK_LEN],
    tail_len: usize,
}

/// Pads `message` to a multiple of 64 bytes.
pub fn pad(message: &[u8]) -> Padded<'_> {
    let body_len = message.len() & !(BLOCK_LEN - 1);
    let (body, rest) = message.split_at(body_len);

    let mut tail = [0u8; 2 * BLOCK_LEN];
    tail[..rest.len()].copy_from_slice(rest);
    tail[rest.len()] = 0x80;
    let tail_len = if rest.len() < 56 {
        BLOCK_LEN
    } else {
        2 * BLOCK_LEN
    };
    let bits = (message.len() as u64).wrapping_mul(8);
    tail[tail_len - 8..tail_len].copy_from_slice(&bits.to_be_bytes());

    Padded {
        body,
        tail,
        tail_len,
    }
}

impl<'a> Padded<'a> {
    /// Total padded length; always a multiple of 64.
    pub fn len(&self) -> usize {
        self.body.len() + self.tail_len
    }

    /// The 64-byte blocks, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.body
            .chunks_exact(BLOCK_LEN)
            .chain(self.tail[..self.tail_len].chunks_exact(BLOCK_LEN))
    }

    /// The padded message as one contiguous buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.body);
        out.extend_from_slice(&self.tail[..self.tail_len]);
        out
    }
}

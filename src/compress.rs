//! The SHA-256 compression function (FIPS 180-4, section 6.2.2).

use crate::padding::BLOCK_LEN;

#[inline(always)]
fn load_be(base: &[u8], offset: usize) -> u32 {
    let addr = &base[offset..];
    (addr[3] as u32) | (addr[2] as u32) << 8 | (addr[1] as u32) << 16 | (addr[0] as u32) << 24
}

#[inline(always)]
fn store_be(base: &mut [u8], offset: usize, x: u32) {
    let addr = &mut base[offset..];
    addr[3] = x as u8;
    addr[2] = (x >> 8) as u8;
    addr[1] = (x >> 16) as u8;
    addr[0] = (x >> 24) as u8;
}

const ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

#[inline(always)]
fn Ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn Maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn Sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn Sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// The 64-word message schedule of one block.
pub(crate) struct MessageSchedule([u32; 64]);

impl MessageSchedule {
    pub(crate) fn new(block: &[u8]) -> Self {
        let mut w = [0u32; 64];
        for (i, e) in w.iter_mut().take(16).enumerate() {
            *e = load_be(block, i * 4);
        }
        for i in 16..64 {
            w[i] = w[i - 16]
                .wrapping_add(sigma0(w[i - 15]))
                .wrapping_add(w[i - 7])
                .wrapping_add(sigma1(w[i - 2]));
        }
        MessageSchedule(w)
    }
}

/// The eight working variables `a..h`.
#[derive(Copy, Clone)]
struct Working([u32; 8]);

impl Working {
    #[cfg_attr(feature = "opt_size", inline(never))]
    #[cfg_attr(not(feature = "opt_size"), inline(always))]
    fn round(&mut self, k: u32, w: u32) {
        let [a, b, c, d, e, f, g, h] = self.0;
        let temp1 = h
            .wrapping_add(Sigma1(e))
            .wrapping_add(Ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let temp2 = Sigma0(a).wrapping_add(Maj(a, b, c));
        self.0 = [
            temp1.wrapping_add(temp2),
            a,
            b,
            c,
            d.wrapping_add(temp1),
            e,
            f,
            g,
        ];
    }
}

/// The running hash state: eight 32-bit words, starting at the SHA-256 IV.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct State([u32; 8]);

impl State {
    pub(crate) fn new() -> Self {
        State(IV)
    }

    /// Mixes one 64-byte block into the state.
    pub(crate) fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_LEN);
        let schedule = MessageSchedule::new(block);
        let mut t = Working(self.0);
        for (&k, &w) in ROUND_CONSTANTS.iter().zip(schedule.0.iter()) {
            t.round(k, w);
        }
        for (s, x) in self.0.iter_mut().zip(t.0.iter()) {
            *s = s.wrapping_add(*x);
        }
    }

    pub(crate) fn store(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, &e) in self.0.iter().enumerate() {
            store_be(&mut out, i * 4, e);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::pad;

    #[test]
    fn schedule_words_are_big_endian() {
        let mut block = [0u8; 64];
        block[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        let w = MessageSchedule::new(&block);
        assert_eq!(w.0[0], 0x61626380);
        assert_eq!(w.0[1], 0);
        // FIPS 180-4 example "abc", W[16] and W[17]
        block[63] = 0x18;
        let w = MessageSchedule::new(&block);
        assert_eq!(w.0[15], 0x18);
        assert_eq!(w.0[16], 0x61626380);
        assert_eq!(w.0[17], 0x000f0000);
    }

    #[test]
    fn abc_single_block() {
        let mut state = State::new();
        for block in pad(b"abc").blocks() {
            state.compress(block);
        }
        assert_eq!(
            state.0,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad
            ]
        );
    }

    #[test]
    fn store_is_big_endian() {
        let out = State::new().store();
        assert_eq!(&out[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&out[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
    }
}

// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 implementation per FIPS 180-4 Section 6.4

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, H0, HASH_LEN, K, LENGTH_FIELD_LEN, ROUNDS};
use crate::word::{big_sigma0, big_sigma1, ch, maj, small_sigma0, small_sigma1};

/// SHA-512 streaming state per FIPS 180-4 Section 6.4.
///
/// All working variables live in the struct so they are wiped on drop,
/// including when the state is consumed by [`Sha512State::finalize`].
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha512State {
    // Hash state H(i) per FIPS 180-4 Section 6.4.2
    h: [u64; 8],

    // Message schedule W[0..79]
    w: [u64; ROUNDS],

    // Working variables a..h
    wv: [u64; 8],

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u128,
}

impl Default for Sha512State {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512State {
    /// Create new SHA-512 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0u64; ROUNDS],
            wv: [0u64; 8],
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len = self.total_len.wrapping_add(data.len() as u128);

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                compress(&mut self.h, &mut self.w, &mut self.wv, &self.buffer);
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        // Process full blocks straight from the input
        while offset + BLOCK_LEN <= data.len() {
            compress(
                &mut self.h,
                &mut self.w,
                &mut self.wv,
                &data[offset..offset + BLOCK_LEN],
            );
            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Finalize and write H(N) to `out`
    pub fn finalize(mut self, out: &mut [u8; HASH_LEN]) {
        // Padding per FIPS 180-4 Section 5.1.2
        let bit_len = self.total_len.wrapping_mul(8);

        // Append the single 1 bit
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the 128-bit length: pad this block and start another
        if self.buffer_len > BLOCK_LEN - LENGTH_FIELD_LEN {
            self.buffer[self.buffer_len..].fill(0);
            compress(&mut self.h, &mut self.w, &mut self.wv, &self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - LENGTH_FIELD_LEN].fill(0);
        self.buffer[BLOCK_LEN - LENGTH_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut self.h, &mut self.w, &mut self.wv, &self.buffer);

        for (chunk, word) in out.chunks_exact_mut(8).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        // Drop zeroizes via ZeroizeOnDrop
    }
}

/// One-shot SHA-512 over `data`.
pub fn sha512(data: &[u8]) -> [u8; HASH_LEN] {
    let mut state = Sha512State::new();
    state.update(data);

    let mut out = [0u8; HASH_LEN];
    state.finalize(&mut out);
    out
}

/// Compress one 1024-bit block per FIPS 180-4 Section 6.4.2
fn compress(h: &mut [u64; 8], w: &mut [u64; ROUNDS], wv: &mut [u64; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    // Step 1: message schedule. W[0..15] big-endian from the block
    for (t, chunk) in block.chunks_exact(8).enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        w[t] = u64::from_be_bytes(bytes);
        bytes.zeroize();
    }

    // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    // Step 2: working variables from H(i-1)
    wv.copy_from_slice(&h[..]);

    // Step 3: 80 rounds
    for t in 0..ROUNDS {
        let [a, b, c, d, e, f, g, hh] = *wv;

        let t1 = hh
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        *wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (hi, vi) in h.iter_mut().zip(wv.iter()) {
        *hi = hi.wrapping_add(*vi);
    }

    w.zeroize();
    wv.zeroize();
}

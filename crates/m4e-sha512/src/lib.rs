// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 implementation per FIPS 180-4 with zeroized working state.
//!
//! Native 64-bit words, wrapping arithmetic, big-endian message packing.
//! The hash registers, message schedule and input buffer are wiped when the
//! state is dropped.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! # Example
//!
//! ```rust
//! use m4e_sha512::{HASH_LEN, Sha512State, sha512};
//!
//! let one_shot = sha512(b"abc");
//!
//! let mut state = Sha512State::new();
//! state.update(b"a");
//! state.update(b"bc");
//! let mut streamed = [0u8; HASH_LEN];
//! state.finalize(&mut streamed);
//!
//! assert_eq!(one_shot, streamed);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod sha512;
mod word;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use sha512::{Sha512State, sha512};
pub use word::{big_sigma0, big_sigma1, ch, maj, small_sigma0, small_sigma1};

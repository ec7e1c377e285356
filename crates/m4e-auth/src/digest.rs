// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 512-bit digest value and its hex wire form.

use core::fmt;
use core::str::FromStr;

use m4e_sha512::HASH_LEN;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use subtle::{Choice, ConstantTimeEq};
use thiserror::Error;
use zeroize::Zeroizing;

/// Length of the hex wire form of a [`HashDigest`]
pub const DIGEST_HEX_LEN: usize = 2 * HASH_LEN;

/// Reason a string could not be parsed as a [`HashDigest`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestParseError {
    /// Input is not exactly [`DIGEST_HEX_LEN`] bytes long
    #[error("expected 128 hex characters, got {actual}")]
    InvalidLength {
        /// Input length in bytes
        actual: usize,
    },

    /// Input contains a non-hex character
    #[error("invalid hex character at index {index}")]
    InvalidCharacter {
        /// Byte offset of the offending character
        index: usize,
    },
}

/// SHA-512 output: 64 bytes, or eight big-endian 64-bit words.
///
/// Serialized as 128 lowercase hex characters. Parsing accepts either case.
/// Equality is constant-time, so comparing a submitted digest against an
/// expected one does not leak the position of the first differing byte.
#[derive(Clone, Copy)]
pub struct HashDigest([u8; HASH_LEN]);

impl HashDigest {
    /// Wraps raw digest bytes
    #[inline]
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// The digest as the eight words H0..H7 of the final hash state
    pub fn words(&self) -> [u64; 8] {
        let mut words = [0u64; 8];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_be_bytes(bytes);
        }
        words
    }

    /// Lowercase hex form, always [`DIGEST_HEX_LEN`] characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex form in a buffer that is wiped on drop.
    ///
    /// Used when the hex text is itself fed into another hash round.
    pub(crate) fn to_hex_zeroizing(&self) -> Zeroizing<String> {
        Zeroizing::new(self.to_hex())
    }

    /// Parses the hex wire form
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(DigestParseError::InvalidLength { actual: s.len() });
        }

        let mut bytes = [0u8; HASH_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { index, .. } => {
                DigestParseError::InvalidCharacter { index }
            }
            _ => DigestParseError::InvalidLength { actual: s.len() },
        })?;

        Ok(Self(bytes))
    }
}

impl ConstantTimeEq for HashDigest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for HashDigest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for HashDigest {}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashDigest({self})")
    }
}

impl FromStr for HashDigest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; HASH_LEN]> for HashDigest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for HashDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HashDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Zeroizing::new(String::deserialize(deserializer)?);
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}

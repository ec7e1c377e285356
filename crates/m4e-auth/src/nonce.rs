// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Random bytes behind a [`Nonce::random`] value
pub const NONCE_BYTES: usize = 16;

/// Server-issued session nonce.
///
/// Opaque to the client: any string is accepted, including the empty one.
/// Lives for a single login attempt.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(String);

impl Nonce {
    /// Wraps a nonce received from the server
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh nonce in the shape of a servlet session id: 32 uppercase hex
    /// characters from [`NONCE_BYTES`] random bytes.
    pub fn random() -> Self {
        let bytes: [u8; NONCE_BYTES] = rand::random();
        Self(hex::encode_upper(bytes))
    }

    /// The nonce text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty nonce
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nonce").field(&self.0).finish()
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Nonce {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Nonce {
    fn from(value: String) -> Self {
        Self(value)
    }
}

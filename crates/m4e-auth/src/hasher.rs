// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Iterated SHA-512 with nonce binding.

use m4e_sha512::sha512;
use zeroize::Zeroizing;

use crate::digest::{DIGEST_HEX_LEN, HashDigest};
use crate::nonce::Nonce;
use crate::password::Password;

/// Number of chained SHA-512 rounds in a credential.
///
/// Fixed by the deployed server; changing it breaks every stored credential.
pub const PASSWORD_HASH_ITERATIONS: usize = 10;

/// Stateless credential hasher.
///
/// Every function is pure and may be called from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// One SHA-512 over `input`. Strings hash as their UTF-8 bytes.
    pub fn hash(input: &[u8]) -> HashDigest {
        HashDigest::from_bytes(sha512(input))
    }

    /// [`PASSWORD_HASH_ITERATIONS`] chained hashes.
    ///
    /// `d0 = hash(input)`, `di = hash(hex(d(i-1)))`, returns `d9`. Each round
    /// hashes the 128-character lowercase hex text of the previous digest,
    /// not its raw bytes.
    pub fn iterated_hash(input: &[u8]) -> HashDigest {
        let mut digest = Self::hash(input);

        for _ in 1..PASSWORD_HASH_ITERATIONS {
            let hex = digest.to_hex_zeroizing();
            digest = Self::hash(hex.as_bytes());
        }

        digest
    }

    /// Credential submitted at registration: the iterated hash of the password.
    pub fn registration_credential(password: &Password) -> HashDigest {
        Self::iterated_hash(password.as_bytes())
    }

    /// Login submission: `hash(hex(iterated_hash(password)) ‖ nonce)`.
    ///
    /// This is the value placed on the wire for a login. The empty nonce is
    /// valid and still yields a well-defined digest.
    pub fn compute_login_submission(password: &Password, nonce: &Nonce) -> HashDigest {
        let credential = Self::registration_credential(password);
        Self::bind_to_nonce(&credential, nonce)
    }

    /// `hash(hex(credential) ‖ nonce)`, shared by the client and the verifier.
    pub(crate) fn bind_to_nonce(credential: &HashDigest, nonce: &Nonce) -> HashDigest {
        let mut salted = Zeroizing::new(String::with_capacity(DIGEST_HEX_LEN + nonce.len()));
        salted.push_str(&credential.to_hex_zeroizing());
        salted.push_str(nonce.as_str());

        Self::hash(salted.as_bytes())
    }
}

// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Server half of the login exchange.

use std::sync::LazyLock;

use subtle::ConstantTimeEq;
use tracing::{debug, trace};

use crate::digest::HashDigest;
use crate::error::AuthError;
use crate::hasher::PasswordHasher;
use crate::nonce::Nonce;

/// Credential of the empty password, refused at registration and reset
static EMPTY_PASSWORD_CREDENTIAL: LazyLock<HashDigest> =
    LazyLock::new(|| PasswordHasher::iterated_hash(b""));

/// Rejects the credential of the empty password.
///
/// Clients hash before submitting, so the server cannot see an empty
/// plaintext; it compares against the known digest of `""` instead.
pub fn ensure_not_empty_credential(credential: &HashDigest) -> Result<(), AuthError> {
    if bool::from(credential.ct_eq(&EMPTY_PASSWORD_CREDENTIAL)) {
        debug!("credential rejected: hash of the empty password");
        return Err(AuthError::EmptyPassword);
    }
    Ok(())
}

/// Verifies login submissions against stored credentials.
///
/// Holds no state: the stored credential and the nonce issued for the
/// session are passed in per call, so one verifier can be shared by every
/// request handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginVerifier;

impl LoginVerifier {
    /// Creates a verifier
    pub fn new() -> Self {
        Self
    }

    /// Issues a fresh nonce for a pending login
    pub fn issue_nonce(&self) -> Nonce {
        let nonce = Nonce::random();
        trace!(nonce_len = nonce.len(), "issued login nonce");
        nonce
    }

    /// The submission a client holding the right password sends for `nonce`
    pub fn expected_submission(&self, stored: &HashDigest, nonce: &Nonce) -> HashDigest {
        PasswordHasher::bind_to_nonce(stored, nonce)
    }

    /// Checks a submitted hex digest.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MalformedDigest`] if `submitted` is not 128 hex characters
    /// - [`AuthError::CredentialMismatch`] if it is not the expected submission
    pub fn verify(
        &self,
        stored: &HashDigest,
        nonce: &Nonce,
        submitted: &str,
    ) -> Result<(), AuthError> {
        let submitted = HashDigest::from_hex(submitted).inspect_err(|err| {
            debug!(%err, "login submission rejected: malformed digest");
        })?;

        let expected = self.expected_submission(stored, nonce);
        if !bool::from(expected.ct_eq(&submitted)) {
            debug!("login submission rejected: credential mismatch");
            return Err(AuthError::CredentialMismatch);
        }

        trace!("login submission accepted");
        Ok(())
    }
}

// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Meet4Eat credential pre-hashing.
//!
//! Plaintext passwords never leave the client. At registration the client
//! submits the *credential*, an iterated SHA-512 of the password. At login it
//! submits a digest of that credential bound to a one-time session nonce:
//!
//! ```text
//! credential = H¹⁰(password)             H(x) = SHA-512(x), chained through hex
//! submission = H(hex(credential) ‖ nonce)
//! ```
//!
//! The server stores the credential, issues the nonce and recomputes the
//! submission to verify it (see [`LoginVerifier`]).
//!
//! # ⚠️ Legacy scheme
//!
//! This is a wire-compatibility mode for existing deployments, not a password
//! KDF: there is no per-user salt, no tunable work factor and no memory
//! hardness. New systems should use Argon2id.
//!
//! # Example
//!
//! ```rust
//! use m4e_auth::{LoginVerifier, Nonce, Password, PasswordHasher};
//!
//! // Registration: the server stores the credential
//! let password = Password::new("correct horse battery");
//! let stored = PasswordHasher::registration_credential(&password);
//!
//! // Login: the server hands out a nonce, the client answers with a submission
//! let verifier = LoginVerifier::new();
//! let nonce = verifier.issue_nonce();
//! let submission = PasswordHasher::compute_login_submission(&password, &nonce);
//!
//! assert_eq!(submission.to_hex().len(), 128);
//! assert!(verifier.verify(&stored, &nonce, &submission.to_hex()).is_ok());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod digest;
mod error;
mod hasher;
mod nonce;
mod password;
mod request;
mod verifier;

pub use digest::{DIGEST_HEX_LEN, DigestParseError, HashDigest};
pub use error::AuthError;
pub use hasher::{PASSWORD_HASH_ITERATIONS, PasswordHasher};
pub use nonce::{NONCE_BYTES, Nonce};
pub use password::{MIN_PASSWORD_LEN, Password, validate_new_password};
pub use request::LoginRequest;
pub use verifier::{LoginVerifier, ensure_not_empty_credential};

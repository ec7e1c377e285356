// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::digest::DigestParseError;

/// Credential handling error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// A required argument was absent or empty
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// New password and its repetition differ
    #[error("the password and its repetition do not match")]
    PasswordMismatch,

    /// New password is shorter than the policy minimum
    #[error("the password must have at least {min} characters (got {actual})")]
    PasswordTooShort {
        /// Required minimum, in UTF-16 code units
        min: usize,
        /// Actual length, in UTF-16 code units
        actual: usize,
    },

    /// Credential is the hash of the empty password
    #[error("the password must not be empty")]
    EmptyPassword,

    /// Submitted value is not a 128-character hex digest
    #[error("malformed digest: {0}")]
    MalformedDigest(#[from] DigestParseError),

    /// Submitted digest does not match the expected one
    #[error("submitted credential does not match")]
    CredentialMismatch,
}

// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde::{Deserialize, Serialize};

use crate::digest::HashDigest;
use crate::error::AuthError;
use crate::hasher::PasswordHasher;
use crate::nonce::Nonce;
use crate::password::Password;

/// Body of the login call: `{"login": "...", "password": "<128 hex>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account login name
    pub login: String,
    /// Login submission, never the plaintext
    pub password: HashDigest,
}

impl LoginRequest {
    /// Builds the login body for `login`, hashing `password` against `nonce`.
    ///
    /// An empty login name is an [`AuthError::InvalidArgument`].
    pub fn new(
        login: impl Into<String>,
        password: &Password,
        nonce: &Nonce,
    ) -> Result<Self, AuthError> {
        let login = login.into();
        if login.is_empty() {
            return Err(AuthError::InvalidArgument("login is empty"));
        }

        Ok(Self {
            login,
            password: PasswordHasher::compute_login_submission(password, nonce),
        })
    }
}

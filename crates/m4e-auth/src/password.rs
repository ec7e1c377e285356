// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Plaintext password wrapper and new-password policy.

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::AuthError;

/// Minimum length of a new password, in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 8;

/// Plaintext password as typed by the user.
///
/// - **Zeroized on drop**: the text buffer is wiped when the value goes away
/// - **No `Clone`**: one owner per typed password
/// - **Redacted `Debug`**: prints `[REDACTED Password]`
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wraps a plaintext password
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(Zeroizing::new(plaintext.into()))
    }

    /// Takes the value of a form field that may be missing.
    ///
    /// An absent field is an [`AuthError::InvalidArgument`]; an empty string
    /// is a valid (if weak) password and is accepted here.
    pub fn from_form_field(field: Option<String>) -> Result<Self, AuthError> {
        match field {
            Some(plaintext) => Ok(Self::new(plaintext)),
            None => Err(AuthError::InvalidArgument("password is missing")),
        }
    }

    /// UTF-8 bytes of the plaintext
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in UTF-16 code units, the way browser and Qt clients count it.
    ///
    /// Characters outside the Basic Multilingual Plane count twice.
    pub fn char_count(&self) -> usize {
        self.0.encode_utf16().count()
    }

    /// True for the empty password
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED Password]")
    }
}

impl From<String> for Password {
    fn from(plaintext: String) -> Self {
        Self::new(plaintext)
    }
}

/// Checks a new password and its repetition before it is hashed.
///
/// The repetition is compared first, then the length against
/// [`MIN_PASSWORD_LEN`].
pub fn validate_new_password(password: &Password, repeat: &Password) -> Result<(), AuthError> {
    if !bool::from(password.as_bytes().ct_eq(repeat.as_bytes())) {
        return Err(AuthError::PasswordMismatch);
    }

    let actual = password.char_count();
    if actual < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
            actual,
        });
    }

    Ok(())
}

// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::BufRead;

use anyhow::{Context, Result};
use m4e_auth::{
    HashDigest, LoginVerifier, Nonce, Password, PasswordHasher, ensure_not_empty_credential,
    validate_new_password,
};
use tracing::{debug, info};

use crate::commands::Command;
use crate::input::resolve_password;

/// Runs one subcommand and returns the line to print.
///
/// `stdin` is only read when a password is needed and was not given.
pub fn run<R: BufRead>(command: Command, stdin: R) -> Result<String> {
    match command {
        Command::Hash { text } => {
            debug!(len = text.len(), "hashing text");
            Ok(PasswordHasher::hash(text.as_bytes()).to_hex())
        }

        Command::Credential { password, repeat } => {
            let password = resolve_password(password.password, stdin)?;

            if let Some(repeat) = repeat {
                let repeat = Password::new(repeat);
                validate_new_password(&password, &repeat).context("password rejected")?;
            }

            let credential = PasswordHasher::registration_credential(&password);
            ensure_not_empty_credential(&credential).context("password rejected")?;

            info!("computed registration credential");
            Ok(credential.to_hex())
        }

        Command::Login { password, nonce } => {
            let password = resolve_password(password.password, stdin)?;
            let nonce = Nonce::new(nonce);

            debug!(nonce_len = nonce.len(), "computing login submission");
            Ok(PasswordHasher::compute_login_submission(&password, &nonce).to_hex())
        }

        Command::Verify {
            stored,
            nonce,
            submitted,
        } => {
            let stored = HashDigest::from_hex(&stored).context("invalid --stored credential")?;
            let nonce = Nonce::new(nonce);

            LoginVerifier::new()
                .verify(&stored, &nonce, &submitted)
                .context("login submission rejected")?;

            info!("login submission verified");
            Ok("ok".to_string())
        }

        Command::Nonce => Ok(LoginVerifier::new().issue_nonce().to_string()),
    }
}

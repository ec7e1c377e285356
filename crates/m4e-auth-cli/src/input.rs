// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::BufRead;

use anyhow::{Context, Result};
use m4e_auth::Password;

/// Resolves the password from the argument or, failing that, from one line
/// of `stdin` with its line terminator removed.
///
/// No argument and an exhausted stdin means no password was given at all.
pub fn resolve_password<R: BufRead>(arg: Option<String>, mut stdin: R) -> Result<Password> {
    if arg.is_some() {
        return Password::from_form_field(arg).context("invalid password argument");
    }

    let mut line = String::new();
    let read = stdin
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let field = (read > 0).then(|| {
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        line
    });

    Password::from_form_field(field).context("no password on the command line or stdin")
}

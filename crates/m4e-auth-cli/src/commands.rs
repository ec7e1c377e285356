// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Compute and check Meet4Eat credentials
#[derive(Parser)]
#[command(name = "m4e-passhash", version, about)]
pub struct Cli {
    /// Verbosity, repeat for more (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Password source shared by the hashing subcommands.
///
/// Falls back to the first line of stdin when neither the flag nor the
/// environment variable is set.
#[derive(Args)]
pub struct PasswordArgs {
    /// Plaintext password
    #[arg(long, env = "M4E_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Single SHA-512 of TEXT
    Hash {
        /// Text to hash (UTF-8)
        text: String,
    },

    /// Registration credential of a password (iterated SHA-512)
    Credential {
        #[command(flatten)]
        password: PasswordArgs,

        /// Repetition of the password; enables the new-password policy
        #[arg(long, env = "M4E_PASSWORD_REPEAT", hide_env_values = true)]
        repeat: Option<String>,
    },

    /// Login submission of a password for a session nonce
    Login {
        #[command(flatten)]
        password: PasswordArgs,

        /// Session nonce issued by the server
        #[arg(long, env = "M4E_NONCE")]
        nonce: String,
    },

    /// Check a submitted digest against a stored credential
    Verify {
        /// Stored credential (128 hex characters)
        #[arg(long)]
        stored: String,

        /// Session nonce the submission was made for
        #[arg(long, env = "M4E_NONCE")]
        nonce: String,

        /// Submitted digest (128 hex characters)
        #[arg(long)]
        submitted: String,
    },

    /// Print a fresh session nonce
    Nonce,
}

// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Cursor;

use m4e_auth::{AuthError, Nonce, Password, PasswordHasher};

use crate::actions::run;
use crate::commands::{Command, PasswordArgs};

const PASSWORD: &str = "meet4eat-secret";
const NONCE: &str = "5F3A9C0E7B21D4468A0F2C9E11B7D3A5";
const CREDENTIAL_HEX: &str = "862541374afb98f801d9b2150a17eae97829f81cae4c5fd3d3519d4cc1a9edb2f9826674f9b8f70c0a47dc2cffa4d1af3884fec7e1a4b36e4a74fdfb38f9478a";
const SUBMISSION_HEX: &str = "7985731fa4a689c77fc89e9deaf823c4d6d487397966c3acd1794aa903b59426672f57b20242330466c32a24d9eda3784643dc3e8f4c15b8b1bbc7d9da4733c3";

fn no_stdin() -> Cursor<&'static str> {
    Cursor::new("")
}

fn password_arg(value: &str) -> PasswordArgs {
    PasswordArgs {
        password: Some(value.to_string()),
    }
}

#[test]
fn test_hash_prints_sha512_hex() {
    let output = run(
        Command::Hash {
            text: "abc".to_string(),
        },
        no_stdin(),
    )
    .expect("hash succeeds");

    assert!(output.starts_with("ddaf35a193617aba"));
    assert_eq!(output.len(), 128);
}

#[test]
fn test_credential_from_argument() {
    let output = run(
        Command::Credential {
            password: password_arg(PASSWORD),
            repeat: None,
        },
        no_stdin(),
    )
    .expect("credential succeeds");

    assert_eq!(output, CREDENTIAL_HEX);
}

#[test]
fn test_credential_from_stdin() {
    let output = run(
        Command::Credential {
            password: PasswordArgs { password: None },
            repeat: None,
        },
        Cursor::new(format!("{PASSWORD}\n")),
    )
    .expect("credential succeeds");

    assert_eq!(output, CREDENTIAL_HEX);
}

#[test]
fn test_credential_rejects_empty_password() {
    let err = run(
        Command::Credential {
            password: password_arg(""),
            repeat: None,
        },
        no_stdin(),
    )
    .expect_err("empty password is refused");

    assert_eq!(
        err.downcast_ref::<AuthError>(),
        Some(&AuthError::EmptyPassword)
    );
}

#[test]
fn test_credential_with_repeat_applies_policy() {
    let err = run(
        Command::Credential {
            password: password_arg(PASSWORD),
            repeat: Some("something else".to_string()),
        },
        no_stdin(),
    )
    .expect_err("mismatch is refused");
    assert_eq!(
        err.downcast_ref::<AuthError>(),
        Some(&AuthError::PasswordMismatch)
    );

    let err = run(
        Command::Credential {
            password: password_arg("short"),
            repeat: Some("short".to_string()),
        },
        no_stdin(),
    )
    .expect_err("short password is refused");
    assert_eq!(
        err.downcast_ref::<AuthError>(),
        Some(&AuthError::PasswordTooShort { min: 8, actual: 5 })
    );
}

#[test]
fn test_login_prints_submission() {
    let output = run(
        Command::Login {
            password: password_arg(PASSWORD),
            nonce: NONCE.to_string(),
        },
        no_stdin(),
    )
    .expect("login succeeds");

    assert_eq!(output, SUBMISSION_HEX);
}

#[test]
fn test_login_without_password_fails() {
    let err = run(
        Command::Login {
            password: PasswordArgs { password: None },
            nonce: NONCE.to_string(),
        },
        no_stdin(),
    )
    .expect_err("no password available");

    assert!(matches!(
        err.downcast_ref::<AuthError>(),
        Some(AuthError::InvalidArgument(_))
    ));
}

#[test]
fn test_verify_ok_and_mismatch() {
    let output = run(
        Command::Verify {
            stored: CREDENTIAL_HEX.to_string(),
            nonce: NONCE.to_string(),
            submitted: SUBMISSION_HEX.to_string(),
        },
        no_stdin(),
    )
    .expect("matching submission verifies");
    assert_eq!(output, "ok");

    let err = run(
        Command::Verify {
            stored: CREDENTIAL_HEX.to_string(),
            nonce: "another-session".to_string(),
            submitted: SUBMISSION_HEX.to_string(),
        },
        no_stdin(),
    )
    .expect_err("replayed submission is refused");
    assert_eq!(
        err.downcast_ref::<AuthError>(),
        Some(&AuthError::CredentialMismatch)
    );
}

#[test]
fn test_verify_rejects_bad_stored_credential() {
    let err = run(
        Command::Verify {
            stored: "not-hex".to_string(),
            nonce: NONCE.to_string(),
            submitted: SUBMISSION_HEX.to_string(),
        },
        no_stdin(),
    )
    .expect_err("stored credential must parse");

    assert!(err.to_string().contains("--stored"));
}

#[test]
fn test_nonce_then_login_round_trip() {
    let nonce = run(Command::Nonce, no_stdin()).expect("nonce succeeds");
    assert_eq!(nonce.len(), 32);

    let submission = run(
        Command::Login {
            password: password_arg(PASSWORD),
            nonce: nonce.clone(),
        },
        no_stdin(),
    )
    .expect("login succeeds");

    let expected =
        PasswordHasher::compute_login_submission(&Password::new(PASSWORD), &Nonce::new(nonce));
    assert_eq!(submission, expected.to_hex());
}

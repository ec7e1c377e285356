// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::{TEST_NONCE, TEST_PASSWORD, TEST_SUBMISSION_HEX};
use crate::{AuthError, LoginRequest, Nonce, Password};

#[test]
fn test_login_request_carries_submission() {
    let password = Password::new(TEST_PASSWORD);
    let nonce = Nonce::new(TEST_NONCE);

    let request = LoginRequest::new("boto", &password, &nonce).expect("valid request");

    assert_eq!(request.login, "boto");
    assert_eq!(request.password.to_hex(), TEST_SUBMISSION_HEX);
}

#[test]
fn test_login_request_json_shape() {
    let password = Password::new(TEST_PASSWORD);
    let nonce = Nonce::new(TEST_NONCE);
    let request = LoginRequest::new("boto", &password, &nonce).expect("valid request");

    let json = serde_json::to_value(&request).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({ "login": "boto", "password": TEST_SUBMISSION_HEX })
    );

    let back: LoginRequest = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, request);
}

#[test]
fn test_login_request_never_contains_plaintext() {
    let password = Password::new(TEST_PASSWORD);
    let request = LoginRequest::new("boto", &password, &Nonce::new(TEST_NONCE))
        .expect("valid request");

    let json = serde_json::to_string(&request).expect("serialize");

    assert!(!json.contains(TEST_PASSWORD));
}

#[test]
fn test_login_request_rejects_empty_login() {
    let password = Password::new(TEST_PASSWORD);

    let result = LoginRequest::new("", &password, &Nonce::new(TEST_NONCE));

    assert_eq!(result, Err(AuthError::InvalidArgument("login is empty")));
}

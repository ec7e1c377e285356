// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod request;

/// Test password with precomputed digests
pub(crate) const TEST_PASSWORD: &str = "meet4eat-secret";

/// Session nonce with precomputed digests
pub(crate) const TEST_NONCE: &str = "5F3A9C0E7B21D4468A0F2C9E11B7D3A5";

/// `iterated_hash(TEST_PASSWORD)`, computed out-of-band
pub(crate) const TEST_CREDENTIAL_HEX: &str = "862541374afb98f801d9b2150a17eae97829f81cae4c5fd3d3519d4cc1a9edb2f9826674f9b8f70c0a47dc2cffa4d1af3884fec7e1a4b36e4a74fdfb38f9478a";

/// `compute_login_submission(TEST_PASSWORD, TEST_NONCE)`, computed out-of-band
pub(crate) const TEST_SUBMISSION_HEX: &str = "7985731fa4a689c77fc89e9deaf823c4d6d487397966c3acd1794aa903b59426672f57b20242330466c32a24d9eda3784643dc3e8f4c15b8b1bbc7d9da4733c3";

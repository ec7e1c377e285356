// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


/// Decode a lowercase hex test vector into a digest array.
pub(crate) fn digest_from_hex(hex: &str) -> [u8; crate::HASH_LEN] {
    assert_eq!(hex.len(), 2 * crate::HASH_LEN, "test vector must be 128 hex chars");

    let mut out = [0u8; crate::HASH_LEN];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).expect("invalid hex in test vector");
    }
    out
}

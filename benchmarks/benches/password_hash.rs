// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use m4e_auth::{LoginVerifier, Nonce, Password, PasswordHasher};

fn benchmark_password_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("password_hash");

    let password = Password::new("benchmark-password");
    let nonce = Nonce::new("5F3A9C0E7B21D4468A0F2C9E11B7D3A5");

    group.bench_function("iterated_hash", |b| {
        b.iter(|| PasswordHasher::iterated_hash(black_box(password.as_bytes())));
    });

    group.bench_function("compute_login_submission", |b| {
        b.iter(|| PasswordHasher::compute_login_submission(black_box(&password), black_box(&nonce)));
    });

    let verifier = LoginVerifier::new();
    let stored = PasswordHasher::registration_credential(&password);
    let submitted = PasswordHasher::compute_login_submission(&password, &nonce).to_hex();

    group.bench_function("verify", |b| {
        b.iter(|| verifier.verify(black_box(&stored), black_box(&nonce), black_box(&submitted)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_password_hash);
criterion_main!(benches);

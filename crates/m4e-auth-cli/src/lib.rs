// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `m4e-passhash`: compute and check Meet4Eat credentials from the shell.
//!
//! Used to seed accounts (the stored credential of an initial admin) and to
//! debug failed logins by recomputing what a client should have sent.

#[cfg(test)]
mod tests;

pub mod actions;
pub mod commands;
pub mod input;
pub mod telemetry;

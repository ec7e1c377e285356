// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use anyhow::Result;
use clap::Parser;
use m4e_auth_cli::{actions, commands::Cli, telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init(cli.verbose)?;

    let output = actions::run(cli.command, std::io::stdin().lock())?;
    println!("{output}");

    Ok(())
}

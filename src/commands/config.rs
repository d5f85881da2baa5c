// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - prints the effective configuration

use super::Output;
use anyhow::{Context, Result};
use repolist::config::{self, Config};

/// Run the config command
pub fn run(config: &Config, output: Output) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    print!("{}", toml::to_string_pretty(config).context("Failed to serialize configuration")?);

    if let Some(file) = config::user_config_file() {
        println!();
        println!("# user config file: {}", file.display());
    }

    Ok(())
}

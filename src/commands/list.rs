// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! List command - scans and prints every repository

use super::Output;
use anyhow::{Context, Result};
use repolist::prelude::*;

/// Run the list command
pub fn run<S: ScanSource, O: RepoOpener>(registry: &mut Registry<S, O>, output: Output) -> Result<()> {
    let repos = registry.list().context("Failed to scan repositories")?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(repos)?);
        return Ok(());
    }

    if repos.is_empty() {
        println!("No git repositories found. Check git_dirs with 'repolist config'.");
        return Ok(());
    }

    println!("Found {} repositories:", repos.len());
    for repo in repos {
        println!("  [{}] {}", output.heading(&repo.group), output.repo_line(repo));
    }

    Ok(())
}

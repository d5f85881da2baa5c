// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Groups command - scans and prints repositories bucketed by group

use super::Output;
use anyhow::{Context, Result};
use repolist::prelude::*;

/// Run the groups command
pub fn run<S: ScanSource, O: RepoOpener>(registry: &mut Registry<S, O>, output: Output) -> Result<()> {
    let grouped = registry.grouped_list().context("Failed to scan repositories")?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    if grouped.is_empty() {
        println!("No git repositories found. Check git_dirs with 'repolist config'.");
        return Ok(());
    }

    for (group, repos) in &grouped {
        println!("{} ({})", output.heading(group), repos.len());
        for repo in repos {
            println!("  {}", output.repo_line(repo));
        }
    }

    Ok(())
}

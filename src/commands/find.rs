// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Find command - resolves a param to its repository

use super::Output;
use anyhow::Result;
use repolist::prelude::*;
use std::process::ExitCode;

/// Exit status when no repository matches
pub const NOT_FOUND: u8 = 2;

/// Run the find command
pub fn run<S: ScanSource, O: RepoOpener>(
    registry: &mut Registry<S, O>,
    param: &str,
    output: Output,
) -> Result<ExitCode> {
    let repo = match registry.find(param) {
        Ok(repo) => repo,
        Err(Error::RepoNotFound(param)) => {
            eprintln!("No such repository: {param}");
            return Ok(ExitCode::from(NOT_FOUND));
        }
        Err(e) => return Err(e.into()),
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(repo)?);
    } else {
        println!("{}", output.repo_line(repo));
        println!("  group: {}", output.heading(&repo.group));
        if repo.bare {
            println!("  bare repository");
        }
    }

    Ok(ExitCode::SUCCESS)
}

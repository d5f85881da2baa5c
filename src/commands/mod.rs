// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

use owo_colors::OwoColorize;
use repolist::Repo;

pub mod completions;
pub mod config;
pub mod find;
pub mod groups;
pub mod list;

/// How results are printed
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Emit JSON instead of text
    pub json: bool,
    /// Colorize text output
    pub color: bool,
}

impl Output {
    /// Style a group heading
    pub fn heading(self, group: &str) -> String {
        let label = if group.is_empty() { "(ungrouped)" } else { group };
        if self.color {
            label.bold().to_string()
        } else {
            label.to_string()
        }
    }

    /// One line describing a repository
    pub fn repo_line(self, repo: &Repo) -> String {
        let param = if self.color {
            repo.param.green().to_string()
        } else {
            repo.param.clone()
        };
        match &repo.description {
            Some(desc) => format!("{}  {}  - {}", param, repo.path.display(), desc),
            None => format!("{}  {}", param, repo.path.display()),
        }
    }
}

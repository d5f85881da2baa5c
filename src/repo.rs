// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Repository handles
//!
//! A [`Repo`] is the registry's view of one git repository on disk: where it
//! lives, the `param` it is looked up by, and the `group` it is listed under.
//! Handles are cheap to build and never hold the repository open.

use crate::error::{Error, Result};
use crate::registry::RepoOpener;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text git and gix write into a fresh `description` file
const PLACEHOLDER_DESCRIPTION: &str = "Unnamed repository";

/// A discovered git repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repo {
    /// Unique identifier within a registry, the last path segment by default
    pub param: String,
    /// Display name
    pub name: String,
    /// Listing group: name of the directory containing the repository
    pub group: String,
    /// Location on disk
    pub path: PathBuf,
    /// Contents of the repository's `description` file, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the repository has no work tree
    pub bare: bool,
}

impl Repo {
    /// Build a handle without touching the filesystem
    pub fn new(path: impl Into<PathBuf>, param: impl Into<String>) -> Self {
        let path = path.into();
        let param = param.into();
        Self {
            name: param.clone(),
            group: group_of(&path),
            param,
            path,
            description: None,
            bare: false,
        }
    }

    /// Open the repository at `path` and build its handle
    ///
    /// Fails with [`Error::NotARepository`] when `path` is neither a work tree
    /// nor a git directory.
    pub fn open(path: &Path, param: impl Into<String>) -> Result<Self> {
        let repository = gix::open(path).map_err(|e| Error::NotARepository {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let mut repo = Self::new(path, param);
        repo.bare = repository.is_bare();
        repo.description = read_description(repository.git_dir());
        debug!("Opened {} as '{}' in group '{}'", path.display(), repo.param, repo.group);
        Ok(repo)
    }

    /// Override the listing group
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }
}

/// The param a path is registered under when none is given
///
/// This is the final path segment, so `/srv/git/alpha` and `/home/me/alpha`
/// both map to `alpha` and deduplicate against each other.
#[must_use]
pub fn default_param(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Name of the directory holding `path`, or an empty group at the root
fn group_of(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_description(git_dir: &Path) -> Option<String> {
    let text = fs::read_to_string(git_dir.join("description")).ok()?;
    let text = text.trim();
    if text.is_empty() || text.starts_with(PLACEHOLDER_DESCRIPTION) {
        None
    } else {
        Some(text.to_string())
    }
}

/// Opens handles with gix
#[derive(Debug, Clone, Copy, Default)]
pub struct GitOpener;

impl RepoOpener for GitOpener {
    fn open(&self, path: &Path, param: &str) -> Result<Repo> {
        Repo::open(path, param)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The repository registry
//!
//! [`Registry`] owns the list of discovered repositories. The list is kept
//! sorted by `(group, param)` and never holds two entries with the same
//! `param`. Listing operations always rescan; [`Registry::find`] serves from
//! the cached list and only rescans on a miss, so repositories created after
//! the last scan (by a push hook, say) are still found.
//!
//! Every operation that can rescan takes `&mut self`: clearing and
//! repopulating the list, and refreshing then searching it, each happen
//! while nobody else can observe the registry.

use crate::error::{Error, Result};
use crate::repo::{default_param, GitOpener, Repo};
use crate::scanner::{self, Pattern};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the registry looks for repositories
pub trait ScanSource {
    /// Directory-glob patterns, in scan order
    fn patterns(&self) -> Result<Vec<String>>;

    /// Base that patterns not naming an existing directory are resolved against
    ///
    /// Read after [`patterns`](Self::patterns) on every scan, so a source
    /// may answer from whatever `patterns` just loaded.
    fn root(&self) -> PathBuf;
}

/// Builds a [`Repo`] for a directory, or reports why it is not one
pub trait RepoOpener {
    /// Open `path` as a repository registered under `param`
    fn open(&self, path: &Path, param: &str) -> Result<Repo>;
}

impl<T: ScanSource + ?Sized> ScanSource for &T {
    fn patterns(&self) -> Result<Vec<String>> {
        (**self).patterns()
    }

    fn root(&self) -> PathBuf {
        (**self).root()
    }
}

/// Discovered repositories, deduplicated by param and sorted by group
#[derive(Debug)]
pub struct Registry<S, O = GitOpener> {
    source: S,
    opener: O,
    entries: Vec<Repo>,
}

impl<S: ScanSource> Registry<S> {
    /// Create an empty registry that opens repositories with gix
    pub fn new(source: S) -> Self {
        Self::with_opener(source, GitOpener)
    }

    /// Create a registry and run the first scan
    pub fn open(source: S) -> Result<Self> {
        let mut registry = Self::new(source);
        registry.refresh()?;
        Ok(registry)
    }
}

impl<S: ScanSource, O: RepoOpener> Registry<S, O> {
    /// Create an empty registry with a custom opener
    pub fn with_opener(source: S, opener: O) -> Self {
        Self {
            source,
            opener,
            entries: Vec::new(),
        }
    }

    /// The configured source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Rebuild the list from a fresh scan of every configured pattern
    ///
    /// Patterns are read and parsed before the current list is cleared, so a
    /// configuration failure leaves the previous entries in place.
    pub fn refresh(&mut self) -> Result<&[Repo]> {
        let patterns = self.source.patterns()?;
        let root = self.source.root();
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(&scanner::resolve(p, &root)))
            .collect::<Result<Vec<_>>>()?;

        self.entries.clear();

        for pattern in &patterns {
            let dirs: Vec<PathBuf> = pattern.expand().into_iter().filter(|p| p.is_dir()).collect();
            debug!("{} directories under {}", dirs.len(), pattern.base().display());
            for dir in dirs {
                self.add(&dir);
            }
        }

        info!("Registry holds {} repositories", self.entries.len());
        Ok(&self.entries)
    }

    /// Register the repository at `path` under its last path segment
    pub fn add(&mut self, path: &Path) -> &[Repo] {
        let param = default_param(path);
        self.add_as(path, &param)
    }

    /// Register the repository at `path` under `param`
    ///
    /// Does nothing when `param` is already taken. A directory that does not
    /// open as a repository is logged and skipped.
    pub fn add_as(&mut self, path: &Path, param: &str) -> &[Repo] {
        if self.has(param) {
            debug!("'{}' already registered, ignoring {}", param, path.display());
            return &self.entries;
        }

        match self.opener.open(path, param) {
            Ok(repo) => {
                let at = self
                    .entries
                    .partition_point(|r| sort_key(r) < sort_key(&repo));
                self.entries.insert(at, repo);
            }
            Err(e) => warn!(error = %e, "Skipping '{}': not a git repository", path.display()),
        }

        &self.entries
    }

    /// Whether a repository with `param` is in the cached list
    #[must_use]
    pub fn has(&self, param: &str) -> bool {
        self.entries.iter().any(|r| r.param == param)
    }

    /// Cached lookup, never rescans
    #[must_use]
    pub fn get(&self, param: &str) -> Option<&Repo> {
        self.entries.iter().find(|r| r.param == param)
    }

    /// Look up a repository, rescanning once if it is not cached
    pub fn find(&mut self, param: &str) -> Result<&Repo> {
        if let Some(at) = self.position(param) {
            return Ok(&self.entries[at]);
        }

        debug!("'{}' not cached, rescanning", param);
        self.refresh()?;

        match self.position(param) {
            Some(at) => Ok(&self.entries[at]),
            None => Err(Error::RepoNotFound(param.to_string())),
        }
    }

    /// Fresh list of every repository, sorted by group
    pub fn list(&mut self) -> Result<&[Repo]> {
        self.refresh()
    }

    /// The cached list as of the last scan
    #[must_use]
    pub fn entries(&self) -> &[Repo] {
        &self.entries
    }

    /// Fresh list bucketed by group, in first-appearance order
    pub fn grouped_list(&mut self) -> Result<IndexMap<String, Vec<&Repo>>> {
        self.refresh()?;

        let mut grouped: IndexMap<String, Vec<&Repo>> = IndexMap::new();
        let mut current: Option<&str> = None;

        for repo in &self.entries {
            if current != Some(repo.group.as_str()) {
                grouped.insert(repo.group.clone(), Vec::new());
                current = Some(repo.group.as_str());
            }
            if let Some(bucket) = grouped.get_mut(&repo.group) {
                bucket.push(repo);
            }
        }

        Ok(grouped)
    }

    /// Number of cached repositories
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cached list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, param: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.param == param)
    }
}

/// Entries order by group, ties broken by param
fn sort_key(repo: &Repo) -> (&str, &str) {
    (repo.group.as_str(), repo.param.as_str())
}

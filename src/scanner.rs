// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Directory glob expansion
//!
//! Patterns are split into a literal base directory and a glob tail. The base
//! is walked with `walkdir` down to the depth the tail can reach, and every
//! entry is matched against the tail with `globset`. Wildcards never cross a
//! path separator except `**`, and dot-entries are only matched by pattern
//! components that start with a dot.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use tracing::debug;
use walkdir::WalkDir;

/// A parsed directory-glob pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Leading components without metacharacters
    base: PathBuf,
    /// Remaining components, at least one of which is a glob
    tail: Vec<String>,
    /// Matcher for `tail`, relative to `base`
    matcher: Option<GlobMatcher>,
}

impl Pattern {
    /// Parse a pattern such as `/srv/git/*` or `repos/{public,private}/*`
    pub fn new(pattern: &str) -> Result<Self> {
        let (base, tail) = split(pattern);
        let matcher = if tail.is_empty() {
            None
        } else {
            let glob = GlobBuilder::new(&tail.join("/"))
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|source| Error::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            Some(glob.compile_matcher())
        };
        Ok(Self { base, tail, matcher })
    }

    /// The literal directory the walk starts from
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Whether the tail contains `**`
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        self.tail.iter().any(|c| c == "**")
    }

    /// Every existing path the pattern matches, sorted
    #[must_use]
    pub fn expand(&self) -> Vec<PathBuf> {
        let Some(matcher) = &self.matcher else {
            return if self.base.exists() {
                vec![self.base.clone()]
            } else {
                Vec::new()
            };
        };

        let root = if self.base.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.base.as_path()
        };

        // min_depth stays at 1 so filter_entry sees every intermediate level
        let recursive = self.is_recursive();
        let mut walker = WalkDir::new(root).follow_links(true).min_depth(1);
        if !recursive {
            walker = walker.max_depth(self.tail.len());
        }

        let mut matches: Vec<PathBuf> = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || self.admits(entry.depth(), entry.file_name()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
            .filter(|entry| recursive || entry.depth() == self.tail.len())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(root).ok()?;
                matcher
                    .is_match(relative)
                    .then(|| self.base.join(relative))
            })
            .collect();

        matches.sort();
        matches
    }

    /// Dot-entries are only visited when the pattern asks for them
    fn admits(&self, depth: usize, name: &std::ffi::OsStr) -> bool {
        if !name.to_string_lossy().starts_with('.') {
            return true;
        }
        if self.is_recursive() {
            self.tail.iter().any(|c| c.starts_with('.'))
        } else {
            self.tail.get(depth - 1).is_some_and(|c| c.starts_with('.'))
        }
    }
}

/// Expand a pattern to its sorted matches
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    Ok(Pattern::new(pattern)?.expand())
}

/// Anchor a configured pattern
///
/// A pattern whose stem (the pattern minus its final character, with
/// trailing separators trimmed) is an existing directory is used as given.
/// Anything else is taken relative to `root`; absolute patterns stay
/// absolute.
#[must_use]
pub fn resolve(pattern: &str, root: &Path) -> String {
    let mut chars = pattern.chars();
    chars.next_back();
    let stem = chars.as_str().trim_end_matches(['/', MAIN_SEPARATOR]);

    if !stem.is_empty() && Path::new(stem).is_dir() {
        pattern.to_string()
    } else {
        root.join(pattern).to_string_lossy().into_owned()
    }
}

/// Whether a single path component contains glob metacharacters
#[must_use]
pub fn is_glob(component: &str) -> bool {
    component.contains(['*', '?', '[', '{'])
}

/// Split a pattern into its literal base and glob tail
#[must_use]
pub fn split(pattern: &str) -> (PathBuf, Vec<String>) {
    let mut base = PathBuf::new();
    let mut tail = Vec::new();

    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if tail.is_empty() && (matches!(component, Component::Prefix(_) | Component::RootDir) || !is_glob(&text)) {
            base.push(component);
        } else {
            tail.push(text.into_owned());
        }
    }

    (base, tail)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Repolist library - find the git repositories living under your directories
//!
//! A [`Registry`] expands configured directory globs, opens every matching
//! directory as a git repository, and keeps the results deduplicated by
//! `param` and sorted by `group`. Lookups are served from the cached list and
//! fall back to a single rescan on a miss.
//!
//! ```no_run
//! use repolist::prelude::*;
//!
//! let config = repolist::config::load(None)?;
//! let mut registry = Registry::open(config)?;
//! for (group, repos) in registry.grouped_list()? {
//!     println!("{group}: {}", repos.len());
//! }
//! # Ok::<(), repolist::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod registry;
pub mod repo;
pub mod scanner;

pub use error::{Error, Result};
pub use registry::Registry;
pub use repo::Repo;

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::registry::{Registry, RepoOpener, ScanSource};
    pub use crate::repo::{GitOpener, Repo};
}

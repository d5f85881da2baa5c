// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for repository discovery and lookup

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A configured glob pattern does not parse
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Parse failure reported by globset
        #[source]
        source: globset::Error,
    },

    /// The path exists but does not hold a git repository
    #[error("Not a git repository: {}", path.display())]
    NotARepository {
        /// Path that failed to open
        path: PathBuf,
        /// Why the repository could not be opened
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No repository with this param, even after a fresh scan
    #[error("No such repository: {0}")]
    RepoNotFound(String),
}

impl Error {
    /// Whether this is the not-found condition raised by a lookup
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RepoNotFound(_))
    }
}

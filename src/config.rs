// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `REPOLIST_*` environment variables. The file is the one passed explicitly
//! (which must exist) or, failing that, `config.toml` in the per-user config
//! directory when present.

use crate::error::Result;
use crate::registry::ScanSource;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REPOLIST";

/// Accepted values of `log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory globs to scan for repositories, in order
    pub git_dirs: Vec<String>,
    /// Base that relative globs are resolved against
    pub root: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_dirs: vec!["./repos/*".to_string()],
            root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            log_level: "info".to_string(),
        }
    }
}

impl ScanSource for Config {
    fn patterns(&self) -> Result<Vec<String>> {
        Ok(self.git_dirs.clone())
    }

    fn root(&self) -> PathBuf {
        self.root.clone()
    }
}

impl Config {
    /// The configured log level, normalised, if it is one of [`LOG_LEVELS`]
    #[must_use]
    pub fn level(&self) -> Option<&'static str> {
        let wanted = self.log_level.trim();
        LOG_LEVELS.into_iter().find(|l| l.eq_ignore_ascii_case(wanted))
    }
}

/// Path of the per-user config file, whether or not it exists
#[must_use]
pub fn user_config_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "repolist")
        .map(|d| d.config_dir().join("config.toml"))
}

/// The file [`load`] reads: `path` if given, else the per-user file if present
#[must_use]
pub fn config_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(p) => Some(p.to_path_buf()),
        None => user_config_file().filter(|p| p.is_file()),
    }
}

/// Load configuration, reading `path` if given
pub fn load(path: Option<&Path>) -> Result<Config> {
    let file = config_file(path);

    let defaults = Config::default();
    let root = file
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map_or(defaults.root.clone(), Path::to_path_buf);

    let mut builder = config::Config::builder()
        .set_default("git_dirs", defaults.git_dirs)?
        .set_default("root", root.to_string_lossy().into_owned())?
        .set_default("log_level", defaults.log_level)?;

    if let Some(file) = &file {
        debug!("Reading configuration from {}", file.display());
        builder = builder.add_source(config::File::from(file.as_path()).required(true));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("git_dirs"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// A scan source that rereads the configuration on every scan
///
/// Edits to the config file take effect on the next refresh without
/// restarting, and a config file that disappears fails the refresh. Each
/// call to `patterns` loads the file once and keeps that snapshot, and
/// `root` answers from it, so both halves of a scan come from the same read.
///
/// Meant for long-lived hosts embedding a [`Registry`](crate::Registry); the
/// CLI runs one command per process and scans a [`Config`] loaded up front.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    path: Option<PathBuf>,
    snapshot: RefCell<Option<Config>>,
}

impl ConfigSource {
    /// Reread `path`, or the per-user file when `None`
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            snapshot: RefCell::new(None),
        }
    }

    /// The configuration read by the latest successful scan
    #[must_use]
    pub fn snapshot(&self) -> Option<Config> {
        self.snapshot.borrow().clone()
    }
}

impl ScanSource for ConfigSource {
    fn patterns(&self) -> Result<Vec<String>> {
        let config = load(self.path.as_deref())?;
        let patterns = config.git_dirs.clone();
        *self.snapshot.borrow_mut() = Some(config);
        Ok(patterns)
    }

    /// Root of the latest snapshot; the default root before the first scan
    fn root(&self) -> PathBuf {
        self.snapshot
            .borrow()
            .as_ref()
            .map_or_else(|| Config::default().root, |c| c.root.clone())
    }
}

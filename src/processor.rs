//! Source processor: file discovery, comment extraction, ngdoc filtering.

use crate::mapper::tags;
use crate::parser;
use crate::record::AnnotationRecord;
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_PATTERN: &str = "**/*.js";

/// Where to look for sources. Every field is optional in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Configuration {
    pub cwd: Option<PathBuf>,
    pub pattern: Option<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Configuration {
    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config: {}", path.display()))
    }

    /// Layer `other` over `self`; set fields in `other` win, ignore lists add up.
    pub fn merge(mut self, other: Configuration) -> Self {
        if other.cwd.is_some() {
            self.cwd = other.cwd;
        }
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        self.ignore.extend(other.ignore);
        self
    }
}

/// Turns a source tree into ngdoc annotation records.
pub struct Processor {
    cwd: PathBuf,
    pattern: String,
    ignore: Vec<Pattern>,
}

impl Processor {
    pub fn new(configuration: Configuration) -> Result<Self> {
        let cwd = match configuration.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir().context("failed to determine working directory")?,
        };
        let ignore = configuration
            .ignore
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("invalid ignore pattern: {}", p)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            cwd,
            pattern: configuration
                .pattern
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            ignore,
        })
    }

    /// Matching files relative to `cwd`, sorted, ignore list subtracted.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let full = format!(
            "{}/{}",
            Pattern::escape(&self.cwd.to_string_lossy()),
            self.pattern
        );
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        let mut files: Vec<PathBuf> = glob::glob_with(&full, options)
            .with_context(|| format!("invalid glob pattern: {}", self.pattern))?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("skipping unreadable path: {}", e);
                    None
                }
            })
            .filter(|p| p.is_file())
            .filter_map(|p| p.strip_prefix(&self.cwd).map(Path::to_path_buf).ok())
            .filter(|rel| !self.is_ignored(rel))
            .collect();

        if files.is_empty() {
            warn!("no files matched: {}", self.pattern);
        }
        files.sort();
        Ok(files)
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignore.iter().any(|p| p.matches_path(relative))
    }

    /// All ngdoc records of all matching files, in file then comment order.
    pub fn process(&self) -> Result<Vec<AnnotationRecord>> {
        let mut records = Vec::new();

        for relative in self.discover()? {
            let path = self.cwd.join(&relative);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            let parsed = match parser::parse_file(&path, &content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            let before = records.len();
            records.extend(parsed.into_iter().filter(is_ngdoc));
            debug!(
                file = %relative.display(),
                records = records.len() - before,
                "parsed"
            );
        }

        info!(records = records.len(), "collected ngdoc records");
        Ok(records)
    }
}

/// Only comments with an `@ngdoc`/`@yadop` marker take part in mapping.
pub fn is_ngdoc(record: &AnnotationRecord) -> bool {
    record.has(tags::is_kind)
}

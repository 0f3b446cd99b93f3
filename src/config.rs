//! Repository configuration
//!
//! Everything that used to be a process-wide constant (where the repository
//! keeps its files, how content is hashed, which clock stamps commits) is a
//! value handed to [`Repository::new`](crate::areas::repository::Repository::new).

use crate::artifacts::core::hasher::{Djb2Hash, HashStrategy, strategy_by_name};
use crate::artifacts::core::layout::{DEFAULT_BRANCH, RepositoryLayout};
use crate::artifacts::objects::commit::TIMESTAMP_FORMAT;
use crate::errors::{Error, Result};
use chrono::{NaiveDateTime, SubsecRound};
use std::sync::Arc;

/// Overrides the repository directory name
pub const DIR_ENV: &str = "MINIGIT_DIR";
/// Selects the hash strategy (`djb2` or `sha1`)
pub const HASH_ENV: &str = "MINIGIT_HASH";
/// Pins the commit timestamp, formatted as `%Y-%m-%d %H:%M:%S`
pub const COMMIT_DATE_ENV: &str = "MINIGIT_COMMIT_DATE";
/// Tracing filter directives for the binary
pub const LOG_ENV: &str = "MINIGIT_LOG";

#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    pub layout: RepositoryLayout,
    pub hasher: Arc<dyn HashStrategy>,
    /// Fixed commit timestamp; local time when unset
    pub commit_date: Option<NaiveDateTime>,
}

impl RepositoryConfig {
    pub fn with_layout(mut self, layout: RepositoryLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn HashStrategy>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_commit_date(mut self, commit_date: NaiveDateTime) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    /// Build a configuration from the `MINIGIT_*` environment variables
    pub fn load_from_env() -> Result<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = RepositoryConfig::default();

        if let Some(dir_name) = var(DIR_ENV) {
            if dir_name.is_empty() || dir_name.contains(&['/', '\\'][..]) {
                return Err(Error::InvalidConfig(format!(
                    "{DIR_ENV} must be a plain directory name, got '{dir_name}'"
                )));
            }
            config.layout = RepositoryLayout::new(dir_name, DEFAULT_BRANCH);
        }

        if let Some(hash) = var(HASH_ENV) {
            config.hasher = Arc::from(strategy_by_name(&hash)?);
        }

        if let Some(date) = var(COMMIT_DATE_ENV) {
            let commit_date = NaiveDateTime::parse_from_str(&date, TIMESTAMP_FORMAT)
                .map_err(|e| Error::InvalidConfig(format!("{COMMIT_DATE_ENV}='{date}': {e}")))?;
            config.commit_date = Some(commit_date);
        }

        Ok(config)
    }

    /// Timestamp for a commit created now
    pub fn commit_timestamp(&self) -> NaiveDateTime {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().naive_local().trunc_subsecs(0))
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            layout: RepositoryLayout::default(),
            hasher: Arc::new(Djb2Hash),
            commit_date: None,
        }
    }
}

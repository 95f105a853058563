use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::budget::BUDGET_FILE;
use crate::run::args::GlobalOpts;

pub(crate) const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub(crate) const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DB_FILE: &str = "walletcamp.db";

/// Everything read from flags and environment, resolved once at startup.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) data_dir: PathBuf,
    /// Reference date for "this month" and "the last month".
    pub(crate) today: NaiveDate,
    /// Checked only when feedback is requested.
    pub(crate) api_key: Option<String>,
    pub(crate) model: String,
    pub(crate) api_url: String,
}

impl Config {
    pub(crate) fn resolve(opts: &GlobalOpts) -> Result<Self> {
        let data_dir = match &opts.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let db_path = opts
            .db
            .clone()
            .unwrap_or_else(|| data_dir.join(DB_FILE));
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let config = Self {
            db_path,
            data_dir,
            today: opts.today.unwrap_or_else(|| Local::now().date_naive()),
            api_key: opts.api_key.clone(),
            model: opts.model.clone(),
            api_url: opts.api_url.clone(),
        };
        tracing::debug!(
            db = %config.db_path.display(),
            data_dir = %config.data_dir.display(),
            today = %config.today,
            "configuration resolved"
        );
        Ok(config)
    }

    pub(crate) fn budget_file(&self) -> PathBuf {
        self.data_dir.join(BUDGET_FILE)
    }

    #[cfg(test)]
    pub(crate) fn for_tests(dir: &std::path::Path) -> Self {
        Self {
            db_path: dir.join(DB_FILE),
            data_dir: dir.to_path_buf(),
            today: NaiveDate::from_ymd_opt(2024, 5, 21).unwrap_or_default(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "walletcamp", "WalletCamp")
        .context("Could not determine data directory")?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "https://dummyjson.com";

pub const API_URL_ENV: &str = "HR_DASHBOARD_API_URL";
pub const DB_PATH_ENV: &str = "HR_DASHBOARD_DB";

/// Employees shown in the feed.
pub const FEED_LIMIT: u32 = 20;
/// Employees aggregated by the analytics dashboard.
pub const ANALYTICS_LIMIT: u32 = 100;
/// Employees counted by the overview tab.
pub const OVERVIEW_LIMIT: u32 = 20;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("", "", "hr-dashboard")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

pub fn db_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        tracing::debug!("Using database path from {DB_PATH_ENV}: {path}");
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        return Ok(path);
    }

    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("hr-dashboard.db"))
}

/// Base URL of the employee API, without a trailing slash.
pub fn api_url() -> Result<String, AppError> {
    let raw = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
        tracing::debug!("{API_URL_ENV} not set, using default: {DEFAULT_API_URL}");
        DEFAULT_API_URL.to_string()
    });
    normalize_api_url(&raw)
}

fn normalize_api_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "{API_URL_ENV} must be an http(s) URL, got '{raw}'"
        )));
    }
    Ok(trimmed.to_string())
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Http(reqwest::StatusCode),

    #[error("Unknown employee source: {0}")]
    UnknownSource(String),

    #[error("Local storage key '{key}' does not hold a valid bookmark list: {source}")]
    CorruptStorage {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

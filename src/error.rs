//! Error types for the end-to-end suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Playwright not found. Install with: npm install playwright && npx playwright install")]
    PlaywrightNotFound,

    #[error("Driver failed to start: {0}")]
    DriverStartup(String),

    #[error("Driver process exited before replying")]
    DriverExited,

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Timed out waiting for driver reply to: {0}")]
    ReplyTimeout(String),

    #[error("Site unreachable: {url} (after {attempts} attempts)")]
    SiteUnreachable { url: String, attempts: usize },

    #[error("Page check failed: {0}")]
    PageCheck(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;

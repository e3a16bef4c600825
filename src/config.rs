//! Suite configuration
//!
//! Plain struct with defaults, overridable through `RB_E2E_*` environment
//! variables so CI and local runs can retarget the suite without code
//! changes.

use std::path::PathBuf;
use std::time::Duration;

use crate::driver::Browser;

#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the site under test.
    pub base_url: String,

    /// Browser engine to launch.
    pub browser: Browser,

    /// Run the browser headless.
    pub headless: bool,

    /// Viewport dimensions
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Default timeout for element interactions.
    pub command_timeout: Duration,

    /// Timeout for page navigations.
    pub navigation_timeout: Duration,

    /// Settle delay after landing on a city page; the booking widget keeps
    /// rendering after network idle.
    pub settle: Duration,

    /// How long the preflight keeps polling the site before giving up.
    pub reachability_timeout: Duration,

    /// Where failure screenshots are written.
    pub screenshot_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.royalbrothers.com".to_string(),
            browser: Browser::Chromium,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            command_timeout: Duration::from_secs(10),
            navigation_timeout: Duration::from_secs(30),
            settle: Duration::from_secs(2),
            reachability_timeout: Duration::from_secs(15),
            screenshot_dir: PathBuf::from("test-results/screenshots"),
        }
    }
}

impl SuiteConfig {
    /// Defaults overridden by any `RB_E2E_*` variables present.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("RB_E2E_BASE_URL") {
            cfg.base_url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = std::env::var("RB_E2E_BROWSER") {
            cfg.browser = Browser::parse(&v);
        }
        if let Some(v) = std::env::var("RB_E2E_HEADLESS").ok().and_then(|v| parse_bool(&v)) {
            cfg.headless = v;
        }
        if let Some(v) = env_ms("RB_E2E_TIMEOUT_MS") {
            cfg.command_timeout = v;
        }
        if let Some(v) = env_ms("RB_E2E_NAV_TIMEOUT_MS") {
            cfg.navigation_timeout = v;
        }
        if let Some(v) = env_ms("RB_E2E_SETTLE_MS") {
            cfg.settle = v;
        }
        if let Ok(v) = std::env::var("RB_E2E_SCREENSHOT_DIR") {
            cfg.screenshot_dir = PathBuf::from(v);
        }

        cfg
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn env_ms(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

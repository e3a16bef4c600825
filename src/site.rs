//! Royal Brothers URL scheme and reachability preflight

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{E2eError, E2eResult};

/// URL slug for a city, as used in `/<city>/bike-rentals` paths.
pub fn city_slug(city: &str) -> String {
    city.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Landing page for a city's bike rentals.
pub fn city_rentals_url(base_url: &str, city: &str) -> String {
    format!("{}/{}/bike-rentals", base_url.trim_end_matches('/'), city_slug(city))
}

/// File-name-safe slug for screenshots and other artifacts.
pub fn artifact_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Poll the site until it answers, or give up.
///
/// Driving a live site that is down only produces confusing selector
/// timeouts, so every scenario runs this before launching a browser.
pub async fn wait_reachable(base_url: &str, timeout: Duration) -> E2eResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    let start = std::time::Instant::now();
    let mut attempts = 0;

    while start.elapsed() < timeout {
        attempts += 1;

        match client.get(base_url).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("Site reachable at {} ({} attempt(s))", base_url, attempts);
                return Ok(());
            }
            Ok(resp) => {
                warn!("Site returned {} for {}", resp.status(), base_url);
            }
            Err(e) => {
                if attempts == 1 {
                    info!("Waiting for {} to respond...", base_url);
                }
                if !e.is_connect() && !e.is_timeout() {
                    warn!("Reachability check error: {}", e);
                }
            }
        }

        sleep(Duration::from_millis(500)).await;
    }

    Err(E2eError::SiteUnreachable {
        url: base_url.to_string(),
        attempts,
    })
}

//! Scenario state: suite config plus the browser session for this scenario

use cucumber::World;
use tracing::{info, warn};

use royalbrothers_e2e::{site, E2eResult, PlaywrightDriver, SuiteConfig};

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct RentalWorld {
    pub config: SuiteConfig,
    driver: Option<PlaywrightDriver>,
}

impl RentalWorld {
    async fn new() -> E2eResult<Self> {
        Ok(Self {
            config: SuiteConfig::from_env(),
            driver: None,
        })
    }

    /// Launch the browser session for this scenario. Checks the site is up
    /// first so a dead site fails fast instead of as selector timeouts.
    pub async fn launch_browser(&mut self) -> E2eResult<()> {
        if self.driver.is_some() {
            return Ok(());
        }

        site::wait_reachable(&self.config.base_url, self.config.reachability_timeout).await?;
        self.driver = Some(PlaywrightDriver::launch(&self.config).await?);
        Ok(())
    }

    pub fn driver(&mut self) -> &mut PlaywrightDriver {
        self.driver
            .as_mut()
            .expect("browser not launched; the scenario must start by opening the website")
    }

    /// Full-page screenshot named after the scenario, for failure triage.
    pub async fn capture_failure_screenshot(&mut self, scenario: &str) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };

        let dir = self.config.screenshot_dir.clone();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!("Could not create screenshot dir {}: {}", dir.display(), e);
            return;
        }

        let path = dir.join(format!("{}.png", site::artifact_slug(scenario)));
        match driver.screenshot(&path, true).await {
            Ok(()) => info!("Failure screenshot: {}", path.display()),
            Err(e) => warn!("Could not capture failure screenshot: {}", e),
        }
    }

    /// Close the browser session, if one was launched.
    pub async fn shutdown(&mut self) {
        if let Some(driver) = self.driver.take() {
            let _ = driver.close().await;
        }
    }
}

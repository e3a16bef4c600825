//! Home and city landing pages: city selection, booking window, search

use std::time::Duration;

use tracing::info;

use crate::config::SuiteConfig;
use crate::driver::PlaywrightDriver;
use crate::error::{E2eError, E2eResult};
use crate::protocol::{LoadState, Locator};
use crate::site;

pub struct HomePage<'d> {
    driver: &'d mut PlaywrightDriver,
    base_url: String,
    settle: Duration,
}

impl<'d> HomePage<'d> {
    pub fn new(driver: &'d mut PlaywrightDriver, config: &SuiteConfig) -> Self {
        Self {
            driver,
            base_url: config.base_url.clone(),
            settle: config.settle,
        }
    }

    /// Open the landing page and verify we reached the right site.
    pub async fn open(&mut self) -> E2eResult<()> {
        let url = self.base_url.clone();
        self.driver.goto(&url, None).await?;

        let title = self.driver.title().await?;
        if !title.contains("Royal Brothers") {
            return Err(E2eError::PageCheck(format!(
                "unexpected page title: {title:?}"
            )));
        }
        Ok(())
    }

    /// Land on the city's bike-rentals page.
    ///
    /// If the current URL already carries the city slug, the site has
    /// redirected us there (geo detection) and no navigation is needed.
    pub async fn select_city(&mut self, city: &str) -> E2eResult<()> {
        self.driver.wait_load(LoadState::NetworkIdle).await?;
        // The booking widget keeps rendering after network idle.
        self.driver.sleep(self.settle).await?;

        let slug = site::city_slug(city);
        let current = self.driver.current_url().await?;
        if current.contains(&slug) {
            info!("Already on {} page, skipping city selection", city);
            return Ok(());
        }

        let url = site::city_rentals_url(&self.base_url, city);
        self.driver.goto(&url, Some(LoadState::NetworkIdle)).await?;
        Ok(())
    }

    /// Walk the pickup/dropoff pickers, accepting the first offered slot in
    /// each. The widget fills the fields itself; the requested window is
    /// logged for the scenario transcript.
    pub async fn set_booking_window(&mut self, start: &str, end: &str) -> E2eResult<()> {
        info!("Selecting booking window: {} to {}", start, end);

        self.driver.click(Locator::css("#pickup-date-desk")).await?;
        self.driver
            .click(Locator::css("#pickup-time-desk").first())
            .await?;
        self.driver.click(Locator::css("#dropoff-date-desk")).await?;
        self.driver
            .click(Locator::css("#dropoff-time-desk").first())
            .await?;
        Ok(())
    }

    /// Submit the booking search.
    pub async fn search(&mut self) -> E2eResult<()> {
        self.driver
            .click(Locator::css("button").has_text("Apply filter").first())
            .await
    }
}

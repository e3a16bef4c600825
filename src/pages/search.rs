//! Search results page: booking summary, filters, result cards

use tracing::info;

use crate::config::SuiteConfig;
use crate::driver::PlaywrightDriver;
use crate::error::E2eResult;
use crate::protocol::{Locator, WaitState};

const RESULT_CARD: &str = "search_page_row.each_card_form";

/// The `data-selected` values of the four booking pickers.
#[derive(Debug, Clone, Default)]
pub struct BookingSelection {
    pub pickup_date: Option<String>,
    pub dropoff_date: Option<String>,
    pub pickup_time: Option<String>,
    pub dropoff_time: Option<String>,
}

impl BookingSelection {
    pub fn is_complete(&self) -> bool {
        self.pickup_date.is_some()
            && self.dropoff_date.is_some()
            && self.pickup_time.is_some()
            && self.dropoff_time.is_some()
    }
}

/// One bike result card.
#[derive(Debug, Clone)]
pub struct BikeCard {
    pub model: String,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub location: String,
    pub availability: Option<String>,
}

impl BikeCard {
    pub fn is_available(&self) -> bool {
        self.availability.as_deref() == Some("available")
    }
}

pub struct SearchPage<'d> {
    driver: &'d mut PlaywrightDriver,
    timeout_ms: u64,
}

impl<'d> SearchPage<'d> {
    pub fn new(driver: &'d mut PlaywrightDriver, config: &SuiteConfig) -> Self {
        Self {
            driver,
            timeout_ms: config.command_timeout.as_millis() as u64,
        }
    }

    /// Whether the search actually landed on the results page.
    pub async fn is_results_page(&mut self) -> E2eResult<bool> {
        Ok(self.driver.current_url().await?.contains("/search"))
    }

    /// Read back what the pickers report as selected.
    pub async fn booking_selection(&mut self) -> E2eResult<BookingSelection> {
        Ok(BookingSelection {
            pickup_date: self.picker_selection("#pickup-date-desk").await?,
            dropoff_date: self.picker_selection("#dropoff-date-desk").await?,
            pickup_time: self.picker_selection("#pickup-time-desk").await?,
            dropoff_time: self.picker_selection("#dropoff-time-desk").await?,
        })
    }

    async fn picker_selection(&mut self, selector: &str) -> E2eResult<Option<String>> {
        self.driver
            .attribute(Locator::css(selector), "data-selected")
            .await
    }

    /// Tick the bike-model filter checkbox, then wait for the checked state
    /// to stick (the page re-renders the filter list on change).
    pub async fn apply_bike_model_filter(&mut self, model: &str) -> E2eResult<()> {
        let checkbox = Self::filter_checkbox("ul.bike_model_listing", model);

        self.driver
            .wait_for(checkbox.clone(), WaitState::Attached, self.timeout_ms)
            .await?;

        if !self.driver.is_checked(checkbox.clone()).await? {
            self.driver.check(checkbox.clone()).await?;
            info!("Applied bike model filter: {}", model);
        } else {
            info!("Bike model filter already applied: {}", model);
        }

        self.driver.wait_checked(checkbox, self.timeout_ms).await
    }

    /// Whether the location filter for this city reports checked.
    pub async fn location_filter_checked(&mut self, location: &str) -> E2eResult<bool> {
        let checkbox = Self::filter_checkbox("ul.location_listing", location);

        if self
            .driver
            .wait_checked(checkbox.clone(), self.timeout_ms)
            .await
            .is_err()
        {
            return self.driver.is_checked(checkbox).await;
        }
        Ok(true)
    }

    /// Label text of every bike model listed in the filter panel.
    pub async fn listed_bike_models(&mut self) -> E2eResult<Vec<String>> {
        let labels = Locator::css("ul.bike_model_listing li.each_list label");
        let count = self.driver.count(labels.clone()).await?;

        let mut models = Vec::with_capacity(count);
        for i in 0..count {
            let text = self.driver.inner_text(labels.clone().nth(i as u32)).await?;
            models.push(text.trim().to_string());
        }
        Ok(models)
    }

    /// Extract every result card on the page.
    pub async fn bike_cards(&mut self) -> E2eResult<Vec<BikeCard>> {
        let cards = Locator::css(RESULT_CARD);
        let count = self.driver.count(cards.clone()).await?;

        let mut result = Vec::with_capacity(count);
        for i in 0..count {
            let card = cards.clone().nth(i as u32);

            let model = self
                .driver
                .inner_text(card.clone().descend("h6.bike_name"))
                .await?;
            let pickup_date = self
                .driver
                .inner_text(card.clone().descend("label#pickup_date"))
                .await?;
            let dropoff_date = self
                .driver
                .inner_text(card.clone().descend("label#dropoff_date"))
                .await?;
            let location = self
                .driver
                .inner_text(card.clone().descend(".location-display"))
                .await?;
            let availability = self
                .driver
                .attribute(
                    card.descend("select[name='location'] option[selected]"),
                    "data-status",
                )
                .await?;

            result.push(BikeCard {
                model: model.trim().to_string(),
                pickup_date: pickup_date.trim().to_string(),
                dropoff_date: dropoff_date.trim().to_string(),
                location: location.trim().to_string(),
                availability,
            });
        }
        Ok(result)
    }

    fn filter_checkbox(listing: &str, label_text: &str) -> Locator {
        Locator::css(format!("{listing} li label"))
            .has_text(label_text)
            .descend("input[type='checkbox']")
            .first()
    }
}

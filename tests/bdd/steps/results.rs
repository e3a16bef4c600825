//! Steps asserting on the search results page and its filters

use cucumber::{then, when};
use tracing::info;

use royalbrothers_e2e::SearchPage;

use crate::world::RentalWorld;

#[then("selected date and filters should be visible")]
async fn booking_selection_visible(world: &mut RentalWorld) {
    let config = world.config.clone();
    let mut page = SearchPage::new(world.driver(), &config);

    assert!(
        page.is_results_page().await.expect("failed to read page URL"),
        "search did not land on the results page"
    );

    let selection = page
        .booking_selection()
        .await
        .expect("failed to read the booking selection");

    assert!(selection.pickup_date.is_some(), "Pickup date should be displayed");
    assert!(selection.dropoff_date.is_some(), "Dropoff date should be displayed");
    assert!(selection.pickup_time.is_some(), "Pickup time should be displayed");
    assert!(selection.dropoff_time.is_some(), "Dropoff time should be displayed");

    info!("Pickup: {}", selection.pickup_date.as_deref().unwrap_or("-"));
    info!("Dropoff: {}", selection.dropoff_date.as_deref().unwrap_or("-"));
}

#[when(expr = "user applies bike model filter {string}")]
async fn apply_bike_model_filter(world: &mut RentalWorld, model: String) {
    let config = world.config.clone();
    SearchPage::new(world.driver(), &config)
        .apply_bike_model_filter(&model)
        .await
        .expect("failed to apply the bike model filter");
}

#[then(expr = "all bikes listed should belong to {string}")]
async fn bikes_belong_to_location(world: &mut RentalWorld, location: String) {
    let config = world.config.clone();
    let mut page = SearchPage::new(world.driver(), &config);

    assert!(
        page.location_filter_checked(&location)
            .await
            .expect("failed to read the location filter"),
        "Location filter is NOT checked: {location}"
    );
    info!("Location filter confirmed: {}", location);

    let models = page
        .listed_bike_models()
        .await
        .expect("failed to list bike models");
    assert!(!models.is_empty(), "No bikes found after applying filters");

    info!("Bikes available at {}:", location);
    for model in &models {
        info!(" - {}", model);
    }
}

#[then(expr = "all shown bike cards should match bike model {string} and show availability")]
async fn bike_cards_match_model(world: &mut RentalWorld, expected_model: String) {
    let config = world.config.clone();
    let cards = SearchPage::new(world.driver(), &config)
        .bike_cards()
        .await
        .expect("failed to read the result cards");

    let expected = expected_model.to_lowercase();
    for card in &cards {
        assert!(
            card.model.to_lowercase().contains(&expected),
            "Unexpected bike model: {}",
            card.model
        );
        assert!(!card.pickup_date.is_empty(), "Pickup date missing for {}", card.model);
        assert!(!card.dropoff_date.is_empty(), "Dropoff date missing for {}", card.model);
        assert!(card.is_available(), "Bike not available: {}", card.model);

        info!(
            "Verified -> {} | Location: {} | Pickup: {} | Dropoff: {}",
            card.model, card.location, card.pickup_date, card.dropoff_date
        );
    }
}

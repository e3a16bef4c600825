//! Steps for opening the site and setting up a booking search

use cucumber::{given, when};

use royalbrothers_e2e::HomePage;

use crate::world::RentalWorld;

#[given("user opens Royal Brothers website")]
async fn open_website(world: &mut RentalWorld) {
    world
        .launch_browser()
        .await
        .expect("failed to launch browser session");

    let config = world.config.clone();
    HomePage::new(world.driver(), &config)
        .open()
        .await
        .expect("Royal Brothers home page did not load");
}

#[when(expr = "user selects city {string}")]
async fn select_city(world: &mut RentalWorld, city: String) {
    let config = world.config.clone();
    HomePage::new(world.driver(), &config)
        .select_city(&city)
        .await
        .expect("failed to open the city page");
}

#[when(expr = "user selects booking time from {string} to {string}")]
async fn select_booking_time(world: &mut RentalWorld, start: String, end: String) {
    let config = world.config.clone();
    HomePage::new(world.driver(), &config)
        .set_booking_window(&start, &end)
        .await
        .expect("failed to set the booking window");
}

#[when("user clicks on search")]
async fn click_search(world: &mut RentalWorld) {
    let config = world.config.clone();
    HomePage::new(world.driver(), &config)
        .search()
        .await
        .expect("failed to submit the search");
}

//! Royal Brothers E2E Test Suite
//!
//! BDD end-to-end tests for the Royal Brothers bike rental site. Gherkin
//! scenarios (in `tests/features/`) drive a real browser: pick a city, set a
//! booking window, search, filter by bike model, and check the results page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              BDD layer (tests/bdd, cucumber)                │
//! │    RentalWorld ── step definitions ── assertions            │
//! ├─────────────────────────────────────────────────────────────┤
//! │              Page objects (pages::home, pages::search)      │
//! │    HomePage::select_city / set_booking_window / search      │
//! │    SearchPage::apply_bike_model_filter / bike_cards / ...   │
//! ├─────────────────────────────────────────────────────────────┤
//! │              Driver (driver, protocol)                      │
//! │    PlaywrightDriver ── JSON lines ── node driver.js         │
//! │                                      └── Playwright page    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The browser is controlled through one persistent Node process running
//! Playwright; commands and replies are newline-delimited JSON. Scenarios run
//! sequentially, one browser session each.

pub mod config;
pub mod driver;
pub mod error;
pub mod pages;
pub mod protocol;
pub mod site;

pub use config::SuiteConfig;
pub use driver::{Browser, PlaywrightDriver};
pub use error::{E2eError, E2eResult};
pub use pages::{BikeCard, BookingSelection, HomePage, SearchPage};

//! Page objects for the Royal Brothers site
//!
//! Thin wrappers over the driver that own the selectors and interaction
//! sequences for the pages the scenarios touch.

pub mod home;
pub mod search;

pub use home::HomePage;
pub use search::{BikeCard, BookingSelection, SearchPage};

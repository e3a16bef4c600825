pub mod booking;
pub mod results;

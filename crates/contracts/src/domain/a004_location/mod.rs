pub mod aggregate;
pub mod data;

pub use aggregate::{footer_locations, Location, OperatingHours};
pub use data::LOCATIONS;

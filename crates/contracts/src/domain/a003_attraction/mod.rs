pub mod aggregate;
pub mod data;

pub use aggregate::{
    featured_attractions, teaser_attractions, Attraction, AttractionDetails, AttractionSchedule,
};
pub use data::ATTRACTIONS;

pub mod aggregate;
pub mod data;

pub use aggregate::{dinopedia, DinoStats, Dinosaur, DINOPEDIA_CATEGORIES};
pub use data::DINOSAURS;

pub mod aggregate;
pub mod data;

pub use aggregate::{DinoCategory, DinoSubCategory};
pub use data::DINO_CATEGORIES;

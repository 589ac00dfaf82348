pub mod a001_dinosaur;
pub mod a002_dino_category;
pub mod a003_attraction;
pub mod a004_location;
pub mod a005_park_feature;

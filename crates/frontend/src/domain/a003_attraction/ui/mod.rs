pub mod showcase;
pub mod teaser;

pub mod teaser;

//! Shared types for the Dinosaur Encounter site.
//!
//! Everything here is plain Rust with no browser or server dependency:
//! the static site content under [`domain`] and the Dinopedia catalog
//! browser under [`shared::catalog`].

pub mod domain;
pub mod shared;

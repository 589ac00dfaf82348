#[allow(clippy::module_inception)]
mod footer;

pub use footer::Footer;

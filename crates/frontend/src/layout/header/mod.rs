mod navbar;

pub use navbar::{Navbar, SocialIcons};

//! Site-wide navigation, social and contact content.

use serde::Serialize;

pub const SITE_NAME: &str = "Dinosaur Encounter";
pub const SITE_BLURB: &str = "Experience the wonders of prehistory at Malaysia's premier dinosaur theme park. Join us for an unforgettable journey through time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

impl NavItem {
    /// "ADVENTURE" -> "Adventure", the footer spelling.
    pub fn title_case(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }

    /// Exact match; the home link is only active on `/`.
    pub fn is_active(&self, pathname: &str) -> bool {
        let trimmed = pathname.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        path == self.href
    }
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        name: "HOME",
        href: "/",
        description: "Return to the main page",
    },
    NavItem {
        name: "ADVENTURE",
        href: "/adventure",
        description: "Explore exciting dinosaur adventures",
    },
    NavItem {
        name: "DINOPEDIA",
        href: "/dinopedia",
        description: "Learn about prehistoric creatures",
    },
    NavItem {
        name: "TICKETS",
        href: "/tickets",
        description: "Book your visit today",
    },
    NavItem {
        name: "ABOUT",
        href: "/about",
        description: "Discover our story",
    },
    NavItem {
        name: "CONTACT",
        href: "/contact",
        description: "Get in touch with us",
    },
];

/// Footer quick links: every nav item except home.
pub fn quick_links() -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(|item| item.href != "/")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Key into the frontend icon set.
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/dinoencounter/",
        icon: "facebook",
    },
    SocialLink {
        name: "TikTok",
        href: "https://www.tiktok.com/@dinosaur.encounter?lang=en",
        icon: "tiktok",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/dinosaur_encounter/?hl=en",
        icon: "instagram",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 2] = [
    ContactChannel {
        title: "Email",
        value: "info@dinosaurencounter.my",
        icon: "envelope",
    },
    ContactChannel {
        title: "Phone",
        value: "+60 9-560 1112",
        icon: "phone",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_links_skip_home() {
        let names: Vec<_> = quick_links().map(|i| i.title_case()).collect();
        assert_eq!(
            names,
            vec!["Adventure", "Dinopedia", "Tickets", "About", "Contact"]
        );
    }

    #[test]
    fn test_is_active() {
        let home = &NAV_ITEMS[0];
        let dinopedia = &NAV_ITEMS[2];
        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/dinopedia"));
        assert!(dinopedia.is_active("/dinopedia"));
        assert!(dinopedia.is_active("/dinopedia/"));
        assert!(!dinopedia.is_active("/about"));
    }
}

use serde::Serialize;

use super::data::LOCATIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatingHours {
    pub weekdays: &'static str,
    pub weekends: &'static str,
    pub holidays: &'static str,
}

/// A park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: u32,
    pub city: &'static str,
    pub state: &'static str,
    pub address: &'static str,
    /// First line of the address, used in the footer.
    pub short_address: &'static str,
    /// `None` when the park has no public line.
    pub phone: Option<&'static str>,
    pub email: &'static str,
    pub image: &'static str,
    pub hours: OperatingHours,
}

impl Location {
    pub fn display_city(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    pub fn phone_or_dash(&self) -> &'static str {
        self.phone.unwrap_or("-")
    }
}

/// Parks listed in the site footer.
pub fn footer_locations() -> &'static [Location] {
    &LOCATIONS[..2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_city() {
        assert_eq!(LOCATIONS[0].display_city(), "Kuantan, Pahang");
        assert_eq!(LOCATIONS[1].display_city(), "Kuala Terengganu, Terengganu");
    }

    #[test]
    fn test_footer_shows_first_two() {
        let cities: Vec<_> = footer_locations().iter().map(|l| l.city).collect();
        assert_eq!(cities, vec!["Kuantan", "Kuala Terengganu"]);
        assert_eq!(footer_locations()[0].hours.weekdays, "9:00 AM - 6:00 PM");
    }

    #[test]
    fn test_missing_phone_renders_dash() {
        assert_eq!(LOCATIONS[2].phone_or_dash(), "-");
        assert_eq!(LOCATIONS[0].phone_or_dash(), "+60 9-560 1112");
    }
}

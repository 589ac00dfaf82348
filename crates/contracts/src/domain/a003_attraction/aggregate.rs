use serde::Serialize;

use super::data::ATTRACTIONS;

/// How many attraction cards the home page shows on a narrow viewport.
pub const NARROW_TEASER_LIMIT: usize = 3;

/// Practical information shown on the Adventure page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttractionDetails {
    pub duration: &'static str,
    pub location: &'static str,
    pub capacity: &'static str,
    pub age_restriction: &'static str,
}

impl AttractionDetails {
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Duration", self.duration),
            ("Location", self.location),
            ("Capacity", self.capacity),
            ("Age", self.age_restriction),
        ]
    }
}

/// Show times per kind of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttractionSchedule {
    pub weekdays: &'static str,
    pub weekends: &'static str,
    pub holidays: &'static str,
}

impl AttractionSchedule {
    pub fn entries(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Weekdays", self.weekdays),
            ("Weekends", self.weekends),
            ("Holidays", self.holidays),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attraction {
    pub id: u32,
    pub title: &'static str,
    /// Home page card copy.
    pub summary: &'static str,
    /// Adventure page lead paragraph.
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub details: Option<AttractionDetails>,
    pub schedule: Option<AttractionSchedule>,
}

impl Attraction {
    /// Feature tags on the home page card.
    pub fn teaser_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(2)]
    }

    pub fn is_featured(&self) -> bool {
        self.details.is_some()
    }
}

/// Home page cards: the first few on a narrow viewport, all otherwise.
pub fn teaser_attractions(is_narrow: bool) -> &'static [Attraction] {
    if is_narrow {
        &ATTRACTIONS[..ATTRACTIONS.len().min(NARROW_TEASER_LIMIT)]
    } else {
        &ATTRACTIONS
    }
}

/// Attractions with a full write-up, in display order.
pub fn featured_attractions() -> impl Iterator<Item = &'static Attraction> {
    ATTRACTIONS.iter().filter(|a| a.is_featured())
}

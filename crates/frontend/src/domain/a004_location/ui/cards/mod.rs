use contracts::domain::a004_location::{Location, LOCATIONS};
use leptos::prelude::*;

use crate::shared::components::{Button, Reveal};
use crate::shared::icons::icon;

/// About page park cards.
#[component]
pub fn LocationCards() -> impl IntoView {
    view! {
        <div class="location-grid">
            {LOCATIONS
                .iter()
                .enumerate()
                .map(|(index, location)| {
                    view! {
                        <Reveal delay_ms={index as u32 * 100}>
                            <LocationCard location=*location />
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn LocationCard(location: Location) -> impl IntoView {
    view! {
        <div class="location-card">
            <div class="location-card__media">
                <img src=location.image alt=location.city />
                <div class="location-card__shade"></div>
                <h3 class="location-card__city">{location.display_city()}</h3>
            </div>
            <div class="location-card__body">
                <p class="location-card__address">{location.address}</p>
                <div class="location-card__hours">
                    <div class="location-card__hours-title">
                        {icon("clock")}
                        <span>"Opening Hours"</span>
                    </div>
                    <div class="info-grid info-grid--two">
                        <div class="info-cell">
                            <span class="info-cell__label">"Weekdays"</span>
                            <span class="info-cell__value">{location.hours.weekdays}</span>
                        </div>
                        <div class="info-cell">
                            <span class="info-cell__label">"Weekends"</span>
                            <span class="info-cell__value">{location.hours.weekends}</span>
                        </div>
                    </div>
                </div>
                <Button href="/tickets" class="button--block">"Plan Your Visit"</Button>
            </div>
            <span class="badge badge--open">"Now Open"</span>
        </div>
    }
}

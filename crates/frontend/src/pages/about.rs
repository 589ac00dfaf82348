use leptos::prelude::*;

use crate::domain::a004_location::ui::cards::LocationCards;
use crate::domain::a005_park_feature::ui::grid::ParkFeatureGrid;
use crate::shared::components::{Button, CtaSection, ScrollIndicator, SectionSubtitle};
use crate::shared::window_scroll::scroll_to_section;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="page-hero">
                <div class="page-hero__background">
                    <img src="/images/dinopedia/1.png" alt="" />
                    <div class="page-hero__shade page-hero__shade--deep"></div>
                </div>
                <div class="page-hero__content container reveal">
                    <SectionSubtitle text="Welcome to the Past" />
                    <h1 class="display">
                        <span class="display__lead">"Discover Our"</span>
                        <span class="display__accent">"Story"</span>
                    </h1>
                    <p class="lead">
                        "Step into a world where prehistoric giants roam and ancient mysteries unfold."
                    </p>
                    <div class="page-hero__actions">
                        <Button on_click=Callback::new(|_| scroll_to_section("features"))>
                            "Start Your Journey"
                        </Button>
                        <Button class="button--muted" disabled=true>
                            "Watch Video"
                        </Button>
                    </div>
                </div>
                <div class="page-hero__scroll">
                    <ScrollIndicator />
                </div>
            </section>

            <section id="features" class="section">
                <div class="container">
                    <div class="section-header reveal">
                        <h2 class="section-title">"Experience the Wonder"</h2>
                        <p class="lead">
                            "Immerse yourself in a meticulously crafted prehistoric world where education meets entertainment."
                        </p>
                    </div>
                    <ParkFeatureGrid />
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-header reveal">
                        <SectionSubtitle text="Locations" />
                        <h2 class="section-title">"Our Parks"</h2>
                        <p class="lead">"Visit us at any of our three signature locations across Malaysia"</p>
                    </div>
                    <LocationCards />
                </div>
            </section>

            <CtaSection
                title="Ready for an Adventure?"
                subtitle="Limited Time Offer"
                description="Book now and get 20% off on all premium experiences!"
                primary_text="Book Now"
                image="/images/dinopedia/2.png"
            />
        </div>
    }
}

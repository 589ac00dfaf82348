use leptos::prelude::*;

use crate::domain::a003_attraction::ui::showcase::AttractionShowcase;
use crate::shared::components::{Button, CtaSection, ScrollIndicator, SectionSubtitle};
use crate::shared::window_scroll::scroll_one_viewport_down;

#[component]
pub fn AdventurePage() -> impl IntoView {
    view! {
        <div class="adventure">
            <section class="page-hero">
                <div class="page-hero__background">
                    <img src="/images/about-bg.png" alt="" />
                    <div class="page-hero__shade"></div>
                </div>
                <div class="page-hero__content container reveal">
                    <SectionSubtitle text="Begin Your Journey" />
                    <h1 class="display">
                        <span class="display__lead">"Begin Your"</span>
                        <span class="display__accent">"Journey"</span>
                    </h1>
                    <p class="lead">
                        "Step into a world where prehistoric wonders come alive. Experience thrilling shows, immersive exhibits, and unforgettable encounters with the giants of the past."
                    </p>
                    <Button on_click=Callback::new(|_| scroll_one_viewport_down())>
                        "Start Your Journey"
                    </Button>
                </div>
                <div class="page-hero__scroll">
                    <ScrollIndicator />
                </div>
            </section>

            <AttractionShowcase />

            <CtaSection
                title="Ready for Adventure?"
                subtitle="Book Your Visit"
                description="Secure your tickets now and embark on an unforgettable prehistoric journey."
                primary_text="Book Now"
                image="/images/dinopedia/2.png"
            />
        </div>
    }
}

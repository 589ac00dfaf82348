use leptos::prelude::*;

use crate::domain::a002_dino_category::ui::teaser::CategoryTeaser;
use crate::domain::a003_attraction::ui::teaser::AttractionsTeaser;
use crate::shared::components::{Button, ScrollIndicator, SectionSubtitle};
use crate::shared::window_scroll::scroll_to_section;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <div id="dinopedia">
                <CategoryTeaser />
            </div>
            <AttractionsTeaser />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__shade"></div>
            <div class="hero__content container">
                <div class="hero__copy slide-in">
                    <SectionSubtitle text="A New Era of Adventure" />
                    <h1 class="display">
                        <span class="display__lead">"Welcome To"</span>
                        <span class="display__accent">"Prehistory"</span>
                    </h1>
                    <p class="lead">
                        "Experience an immersive encounter with Earth's most magnificent creatures. Walk among giants in a meticulously crafted prehistoric world."
                    </p>
                    <Button on_click=Callback::new(|_| scroll_to_section("dinopedia"))>
                        "EXPLORE NOW"
                    </Button>
                </div>
            </div>
            <div class="hero__scroll">
                <ScrollIndicator />
            </div>
        </section>
    }
}

use leptos::prelude::*;

use super::{Button, SectionSubtitle};

/// Closing "book your visit" banner.
#[component]
pub fn CtaSection(
    #[prop(into, default = "Start Your Adventure".into())] title: String,
    #[prop(into, default = "Ready to Explore?".into())] subtitle: String,
    #[prop(
        into,
        default = "Step into a world where prehistoric giants roam and ancient mysteries await. Book your tickets now and embark on an unforgettable journey through time.".into()
    )]
    description: String,
    #[prop(into, default = "Book Tickets".into())] primary_text: String,
    #[prop(into, default = "/tickets".into())] primary_href: String,
    #[prop(into, default = "Learn More".into())] secondary_text: String,
    #[prop(into, default = "/about".into())] secondary_href: String,
    #[prop(into, default = "/images/dinopedia/1.png".into())] image: String,
) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta__background">
                <img src=image alt="" class="cta__image" />
                <div class="cta__shade"></div>
            </div>
            <div class="cta__content container">
                <SectionSubtitle text=subtitle class="cta__subtitle" />
                <h2 class="cta__title">{title}</h2>
                <p class="cta__description">{description}</p>
                <div class="cta__actions">
                    <Button href=primary_href class="button--amber">{primary_text}</Button>
                    <Button href=secondary_href>{secondary_text}</Button>
                </div>
                <div class="cta__glow cta__glow--amber"></div>
                <div class="cta__glow cta__glow--violet"></div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::shared::components::Button;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container">
                <span class="eyebrow">"404"</span>
                <h1 class="display">
                    <span class="display__lead">"Lost In"</span>
                    <span class="display__accent">"Time"</span>
                </h1>
                <p class="lead">"The page you are looking for went extinct, or never existed."</p>
                <Button href="/">"Back to Home"</Button>
            </div>
        </section>
    }
}

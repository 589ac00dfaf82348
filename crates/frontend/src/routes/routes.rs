use crate::layout::Shell;
use crate::pages::{
    about::AboutPage, adventure::AdventurePage, contact::ContactPage, home::HomePage,
    not_found::NotFoundPage, tickets::TicketsPage,
};
use crate::domain::a001_dinosaur::ui::list::DinopediaPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/adventure") view=AdventurePage />
                    <Route path=path!("/dinopedia") view=DinopediaPage />
                    <Route path=path!("/tickets") view=TicketsPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}

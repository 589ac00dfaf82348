pub mod footer;
pub mod global_context;
pub mod header;
pub mod scroll_gradient;

use leptos::prelude::*;

use footer::Footer;
use header::Navbar;
use scroll_gradient::ScrollGradient;

/// Site shell.
///
/// ```text
/// +------------------------------------------+
/// |  fixed background + scroll gradients     |
/// |  Navbar                                  |
/// |  routed page                             |
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-background" aria-hidden="true">
            <div class="site-background__image"></div>
            <div class="site-background__noise"></div>
            <div class="site-background__shade"></div>
        </div>
        <ScrollGradient />
        <Navbar />
        <main class="site-main">
            {children()}
        </main>
        <Footer />
    }
}

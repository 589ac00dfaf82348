use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, set_timeout_with_handle};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::Spinner;

const REDIRECT_AFTER_SECS: u32 = 5;

/// Countdown line under the spinner.
pub fn countdown_label(remaining: u32) -> String {
    match remaining {
        0 => "Redirecting...".to_string(),
        1 => "Redirecting in 1 second...".to_string(),
        n => format!("Redirecting in {} seconds...", n),
    }
}

/// Placeholder while online ticketing is offline. Sends the visitor home
/// after a few seconds; leaving earlier cancels the redirect.
#[component]
pub fn TicketsPage() -> impl IntoView {
    let navigate = use_navigate();
    let remaining = RwSignal::new(REDIRECT_AFTER_SECS);

    let redirect = set_timeout_with_handle(
        move || navigate("/", Default::default()),
        Duration::from_secs(REDIRECT_AFTER_SECS as u64),
    )
    .map_err(|e| log::error!("failed to schedule redirect: {:?}", e))
    .ok();

    let ticker = set_interval_with_handle(
        move || {
            remaining.try_update(|n| *n = n.saturating_sub(1));
        },
        Duration::from_secs(1),
    )
    .map_err(|e| log::error!("failed to start countdown: {:?}", e))
    .ok();

    on_cleanup(move || {
        if let Some(handle) = redirect {
            handle.clear();
        }
        if let Some(handle) = ticker {
            handle.clear();
        }
    });

    view! {
        <section class="tickets">
            <div class="tickets__background">
                <img src="/images/dinopedia/1.png" alt="" />
                <div class="tickets__shade"></div>
            </div>
            <div class="tickets__content reveal">
                <h1 class="tickets__title">"Coming Soon"</h1>
                <p class="tickets__text">
                    "We're currently updating our ticketing system. Redirecting you to homepage in a moment..."
                </p>
                <div class="tickets__spinner">
                    <Spinner />
                </div>
                <p class="tickets__countdown">{move || countdown_label(remaining.get())}</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_label() {
        assert_eq!(countdown_label(5), "Redirecting in 5 seconds...");
        assert_eq!(countdown_label(1), "Redirecting in 1 second...");
        assert_eq!(countdown_label(0), "Redirecting...");
    }
}

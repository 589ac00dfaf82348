use contracts::shared::site::{NavItem, NAV_ITEMS, SITE_NAME, SOCIAL_LINKS};
use contracts::shared::catalog::ScrollLockPort;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_site_context;
use crate::shared::icons::icon;
use crate::shared::motion::navbar_condensed;
use crate::shared::scroll_lock::BodyScrollLock;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site_context();
    let pathname = use_location().pathname;
    let hovered = RwSignal::new(None::<&'static str>);
    let menu_open = site.mobile_menu_open;

    // Close mobile menu when route changes
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    // Lock body scroll while the mobile menu is open
    Effect::new(move |prev: Option<bool>| {
        let open = menu_open.get();
        if prev.is_some() || open {
            BodyScrollLock.set_locked(open);
        }
        open
    });

    let link_class = move |item: &'static NavItem| {
        let active = item.is_active(&pathname.get());
        let state = match hovered.get() {
            _ if active => "navbar__link--active",
            Some(name) if name == item.name => "navbar__link--hovered",
            Some(_) => "navbar__link--dimmed",
            None => "",
        };
        format!("navbar__link {}", state)
    };

    view! {
        <nav class=move || {
            if navbar_condensed(site.scroll_y.get()) { "navbar navbar--condensed" } else { "navbar" }
        }>
            <div class="navbar__inner">
                <a href="/" class="navbar__logo">
                    <img src="/images/logo-colored.png" alt=SITE_NAME width="120" height="40" />
                </a>

                <div class="navbar__desktop">
                    <div class="navbar__links">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class=move || link_class(item)
                                        on:mouseenter=move |_| hovered.set(Some(item.name))
                                        on:mouseleave=move |_| hovered.set(None)
                                    >
                                        <span>{item.name}</span>
                                        <span class="navbar__underline"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <SocialIcons class="navbar__social" />
                </div>

                <button
                    class="navbar__burger"
                    aria-label="Open menu"
                    on:click=move |_| menu_open.set(true)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <MobileMenu />
            </Show>
        </nav>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let site = use_site_context();
    let pathname = use_location().pathname;
    let selected = RwSignal::new(None::<&'static str>);
    let close = move || site.mobile_menu_open.set(false);

    view! {
        <div class="mobile-menu">
            <div class="mobile-menu__header">
                <a href="/" on:click=move |_| close()>
                    <img src="/images/logo-colored.png" alt=SITE_NAME width="100" height="35" />
                </a>
                <button class="icon-button" aria-label="Close menu" on:click=move |_| close()>
                    {icon("x")}
                </button>
            </div>

            <div class="mobile-menu__items">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_selected = move || selected.get() == Some(item.name);
                        view! {
                            <a
                                href=item.href
                                class="mobile-menu__item"
                                style=format!("animation-delay: {}ms;", 200 + index * 100)
                                on:click=move |_| close()
                                on:mouseenter=move |_| selected.set(Some(item.name))
                                on:mouseleave=move |_| selected.set(None)
                            >
                                <div class="mobile-menu__row">
                                    <span class=move || {
                                        if item.is_active(&pathname.get()) {
                                            "mobile-menu__name mobile-menu__name--active"
                                        } else {
                                            "mobile-menu__name"
                                        }
                                    }>{item.name}</span>
                                    <span class=move || {
                                        if is_selected() { "mobile-menu__arrow mobile-menu__arrow--shifted" } else { "mobile-menu__arrow" }
                                    }>{icon("arrow-right")}</span>
                                </div>
                                <p class=move || {
                                    if is_selected() { "mobile-menu__description mobile-menu__description--visible" } else { "mobile-menu__description" }
                                }>{item.description}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <SocialIcons class="mobile-menu__social" />
        </div>
    }
}

#[component]
pub fn SocialIcons(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            {SOCIAL_LINKS
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-icon"
                            aria-label=social.name
                        >
                            {icon(social.icon)}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

use contracts::domain::a004_location::footer_locations;
use contracts::shared::site::{quick_links, SITE_BLURB, SITE_NAME};
use leptos::prelude::*;

use crate::layout::header::SocialIcons;
use crate::shared::icons::icon;

fn copyright_line(year: u32) -> String {
    format!("\u{a9} {} {}. All rights reserved.", year, SITE_NAME)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__border"></div>
            <div class="footer__content">
                <div class="footer__brand">
                    <img src="/images/logo-colored.png" alt=SITE_NAME width="140" height="48" />
                    <p class="footer__blurb">{SITE_BLURB}</p>
                    <SocialIcons class="footer__social" />
                </div>

                <div class="footer__columns">
                    <div class="footer__column">
                        <h3 class="footer__heading">"QUICK LINKS"</h3>
                        <nav class="footer__links">
                            {quick_links()
                                .map(|link| {
                                    view! {
                                        <a href=link.href class="footer__link">
                                            <span>{link.title_case()}</span>
                                            {icon("arrow-up-right")}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>

                    <div class="footer__column">
                        <h3 class="footer__heading">"VISIT US"</h3>
                        {footer_locations()
                            .iter()
                            .map(|location| {
                                view! {
                                    <div class="footer__location">
                                        <div class="footer__location-title">
                                            <h4>{location.city}</h4>
                                            <span>{location.state}</span>
                                        </div>
                                        <p>{location.short_address}</p>
                                        <p>{location.phone_or_dash()}</p>
                                        <p>{location.hours.weekdays}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="footer__bottom">
                <p>{copyright_line(year)}</p>
                <div class="footer__legal">
                    <a href="/privacy">"Privacy Policy"</a>
                    <a href="/terms">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2025),
            "\u{a9} 2025 Dinosaur Encounter. All rights reserved."
        );
    }
}

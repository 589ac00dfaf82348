use contracts::domain::a005_park_feature::PARK_FEATURES;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::motion::stagger_style;

#[component]
pub fn ParkFeatureGrid() -> impl IntoView {
    view! {
        <div class="park-feature-grid">
            {PARK_FEATURES
                .iter()
                .enumerate()
                .map(|(index, feature)| {
                    view! {
                        <div class="park-feature reveal" style=stagger_style(0, 100, index)>
                            <div class="park-feature__glow"></div>
                            <div class="park-feature__icon">{icon(feature.icon)}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

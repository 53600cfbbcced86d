use dioxus::prelude::*;

use crate::chart::RenderedChart;
use crate::map::ChartLegend;
use crate::t;

/// Live chart, or the prompt to pick something when the selection is empty.
#[component]
pub fn MapPreview(#[props(!optional)] chart: Option<RenderedChart>) -> Element {
    let Some(chart) = chart else {
        return rsx! {
            section { class: "map-card map-preview",
                p { class: "map-card__placeholder", {t!("map-empty-prompt")} }
            }
        };
    };

    let markup = chart.to_svg();
    let bar_count = chart.bars.len();

    rsx! {
        section { class: "map-card map-preview",
            div { class: "map-card__header",
                h2 { "{chart.heading}" }
                span { class: "map-card__meta", {t!("map-preview-bars", count = bar_count)} }
            }
            div {
                class: "map-preview__figure",
                role: "img",
                aria_label: "{chart.heading}",
                dangerous_inner_html: "{markup}",
            }
            ChartLegend { bars: chart.bars.clone() }
        }
    }
}

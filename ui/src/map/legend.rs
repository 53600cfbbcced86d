use dioxus::prelude::*;

use crate::chart::Bar;
use crate::core::catalog;
use crate::core::format::{format_degrees, format_intensity};
use crate::t;

/// Per-bar key under the preview: color, descriptor, category, intensity.
#[component]
pub fn ChartLegend(bars: Vec<Bar>) -> Element {
    rsx! {
        div { class: "map-legend",
            h3 { class: "map-legend__heading", {t!("map-legend-heading")} }
            ul { class: "map-legend__items",
                for bar in bars.iter() {
                    li { key: "{bar.label}", class: "map-legend__item",
                        span { class: "map-swatch", style: "background: {bar.color}" }
                        span { class: "map-legend__label", "{bar.label}" }
                        span { class: "map-legend__category", "{bar.category}" }
                        span { class: "map-legend__meter",
                            {format_intensity(bar.intensity)}
                        }
                        span { class: "map-legend__angle", {format_degrees(bar.angle)} }
                    }
                }
            }
        }
    }
}

/// Full catalog: every category with its color and descriptors.
#[component]
pub fn CatalogLegend() -> Element {
    rsx! {
        div { class: "catalog-grid",
            for category in catalog::categories() {
                section { key: "{category.name}", class: "map-card catalog-card",
                    div { class: "map-card__header",
                        h2 {
                            span { class: "map-swatch", style: "background: {category.color}" }
                            "{category.name}"
                        }
                        span { class: "map-card__meta", "{category.color}" }
                    }
                    ul { class: "catalog-card__items",
                        for descriptor in catalog::descriptors_in(category.name) {
                            li { key: "{descriptor.name}", "{descriptor.name}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::catalog::{self, Category};
use crate::core::config;
use crate::core::selection::{Intensity, Selection};
use crate::t;

/// Title input plus one expander per category. Widget events write straight
/// into `selection`; the parent re-renders the chart from it.
#[component]
pub fn MapForm(title: Signal<String>, selection: Signal<Selection>) -> Element {
    let initial = config::current().default_intensity;
    let selected_count = selection.read().len();
    let current_title = title();

    let mut title_input = title;
    let mut clear_target = selection;

    rsx! {
        section { class: "map-card map-form",
            div { class: "map-card__header",
                h2 { {t!("map-form-heading")} }
                if selected_count > 0 {
                    span { class: "map-card__meta", {t!("map-form-selected", count = selected_count)} }
                }
            }

            label { class: "map-form__field", r#for: "work-title",
                span { class: "map-form__label", {t!("map-title-label")} }
                input {
                    id: "work-title",
                    class: "map-form__input",
                    r#type: "text",
                    value: "{current_title}",
                    oninput: move |evt: FormEvent| title_input.set(evt.value()),
                }
            }

            h3 { class: "map-form__subheading", {t!("map-intensity-heading")} }

            for category in catalog::categories() {
                CategoryExpander {
                    key: "{category.name}",
                    category: *category,
                    selection,
                    initial,
                }
            }

            if selected_count > 0 {
                div { class: "map-form__actions",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| clear_target.write().clear(),
                        {t!("map-clear")}
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryExpander(category: Category, selection: Signal<Selection>, initial: Intensity) -> Element {
    let picked = {
        let current = selection.read();
        catalog::descriptors_in(category.name)
            .filter(|d| current.contains(d.name))
            .count()
    };

    rsx! {
        details { class: "map-expander",
            summary { class: "map-expander__summary",
                span { class: "map-swatch", style: "background: {category.color}" }
                span { class: "map-expander__title", "{category.name}" }
                if picked > 0 {
                    span { class: "map-expander__count", "{picked}" }
                }
            }
            ul { class: "map-expander__items",
                for descriptor in catalog::descriptors_in(category.name) {
                    DescriptorRow {
                        key: "{descriptor.name}",
                        name: descriptor.name,
                        selection,
                        initial,
                    }
                }
            }
        }
    }
}

/// Checkbox selects/deselects; the slider appears once selected.
#[component]
fn DescriptorRow(name: &'static str, selection: Signal<Selection>, initial: Intensity) -> Element {
    let level = selection.read().intensity_of(name);
    let checked = level.is_some();
    let row_class = if checked {
        "map-row map-row--active"
    } else {
        "map-row"
    };
    let input_id = format!("affect-{name}");
    let (min, max) = (Intensity::MIN, Intensity::MAX);

    let mut toggle_target = selection;
    let mut slider_target = selection;

    rsx! {
        li { class: "{row_class}",
            label { class: "map-row__check", r#for: "{input_id}",
                input {
                    id: "{input_id}",
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |_| toggle_target.write().toggle(name, initial),
                }
                span { class: "map-row__name", "{name}" }
            }
            if let Some(level) = level {
                input {
                    class: "map-row__slider",
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "1",
                    value: "{level}",
                    aria_label: "{name}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(raw) = evt.value().parse::<u8>() {
                            slider_target.write().set_intensity(name, raw);
                        }
                    },
                }
                span { class: "map-row__value", "{level}" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::catalog;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code so the page re-renders on change.
    let lang_marker = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string());

    log::trace!("[i18n] Home render (lang={lang_marker})");

    let categories = catalog::CATEGORIES.len();
    let descriptors = catalog::DESCRIPTORS.len();

    rsx! {
        section { class: "page page-home",
            div { style: "display:none", "{lang_marker}" }
            h1 { {t!("home-title")} }
            p { class: "page-home__tagline", {t!("home-tagline-short")} }
            p { {t!("home-intro-1")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-select", categories = categories, descriptors = descriptors)} }
                li { {t!("home-feature-chart")} }
                li { {t!("home-feature-export")} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}

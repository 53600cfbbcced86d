use dioxus::prelude::*;

use crate::map::CatalogLegend;
use crate::t;

/// Read-only reference of every category, its colour and its descriptors.
#[component]
pub fn Catalog() -> Element {
    let lang_marker = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();

    rsx! {
        section { class: "page page-catalog",
            div { style: "display:none", "{lang_marker}" }
            h1 { {t!("page-catalog-title")} }
            p { {t!("page-catalog-intro")} }
            CatalogLegend {}
        }
    }
}

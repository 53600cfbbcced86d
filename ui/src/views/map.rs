use dioxus::prelude::*;

use crate::core::config;
use crate::map::{AccessGate, MapWorkspace};
use crate::t;

#[component]
pub fn Map() -> Element {
    let lang_marker = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();
    let phrase = config::current().access_phrase.clone();

    rsx! {
        section { class: "page page-map",
            div { style: "display:none", "{lang_marker}" }
            h1 { {t!("page-map-title")} }
            p { {t!("page-map-intro")} }

            if let Some(phrase) = phrase {
                AccessGate { phrase, MapWorkspace {} }
            } else {
                MapWorkspace {}
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::gate;
use crate::map::use_map_session;
use crate::t;

/// Plaintext phrase screen in front of `children`.
///
/// Placeholder only, not access control: see [`crate::core::gate`]. The
/// unlocked state is kept in the [`MapSession`](crate::map::MapSession) so a
/// language switch does not lock the gate again.
#[component]
pub fn AccessGate(phrase: String, children: Element) -> Element {
    let mut unlocked = use_map_session().unlocked;
    let mut attempt = use_signal(String::new);
    let mut rejected = use_signal(|| false);

    if unlocked() {
        return rsx! { {children} };
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if gate::phrase_matches(&phrase, &attempt()) {
            log::info!("[gate] unlocked");
            unlocked.set(true);
        } else {
            rejected.set(true);
        }
    };

    rsx! {
        section { class: "map-card map-gate",
            div { class: "map-card__header",
                h2 { {t!("gate-heading")} }
            }
            p { class: "map-card__meta", {t!("gate-notice")} }
            form { class: "map-gate__form", onsubmit: on_submit,
                label { class: "visually-hidden", r#for: "gate-phrase", {t!("gate-label")} }
                input {
                    id: "gate-phrase",
                    class: "map-form__input",
                    r#type: "password",
                    value: "{attempt}",
                    oninput: move |evt: FormEvent| {
                        rejected.set(false);
                        attempt.set(evt.value());
                    },
                }
                button { r#type: "submit", class: "button button--primary", {t!("gate-submit")} }
            }
            if rejected() {
                p { class: "map-card__meta map-card__meta--error", {t!("gate-rejected")} }
            }
        }
    }
}

use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::core::config::{self, AppConfig};
use ui::map::MapSession;
use ui::views::{Catalog, Home, Map};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/map")]
    Map {},
    #[route("/catalog")]
    Catalog {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_map(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Map {},
        "{label}"
    })
}
fn nav_catalog(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Catalog {},
        "{label}"
    })
}

fn main() {
    let config = AppConfig::load();
    init_logging(config.log_level.to_level_filter());
    if !config::install(config) {
        log::warn!("[config] configuration was already installed");
    }
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging(level: log::LevelFilter) {
    console_error_panic_hook::set_once();
    let level = level.to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_err() {
        log::warn!("[log] a logger was already installed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_level: log::LevelFilter) {}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Map state lives above the language-keyed wrapper so it survives a
    // locale switch.
    use_context_provider(MapSession::new);

    register_nav(NavBuilder {
        home: nav_home,
        map: nav_map,
        catalog: nav_catalog,
    });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}

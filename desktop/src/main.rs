#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::core::config::{self, AppConfig};
use ui::map::MapSession;
use ui::views::{Catalog, Home, Map};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/map")]
    Map {},
    #[route("/catalog")]
    Catalog {},
}

// Shared theme, always inlined so packaged builds need no external stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Load configuration and start logging. `RUST_LOG` overrides the
/// configured level.
fn bootstrap() {
    let config = AppConfig::load();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match config::config_path() {
        Some(path) => log::info!("[config] using {}", path.display()),
        None => log::info!("[config] no config directory; using defaults"),
    }
    if config.access_phrase.is_some() {
        log::info!("[gate] access phrase screen enabled");
    }
    if !config::install(config) {
        log::warn!("[config] configuration was already installed");
    }

    // Font discovery walks the system font directories; do it before the
    // first chart renders.
    let fonts = ui::chart::fonts::font_setup();
    log::info!("[fonts] chart family stack: {}", fonts.family_stack());
}

#[cfg(feature = "desktop")]
fn main() {
    bootstrap();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Affectmap – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    bootstrap();
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_map(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Map {}, "{label}" })
}
fn nav_catalog(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Catalog {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this on language selection.
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
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared navbar above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}

mod export;
pub use export::{MapExport, MapExportEntry, MapExportPanel};

mod form;
pub use form::MapForm;

mod gate;
pub use gate::AccessGate;

mod legend;
pub use legend::{CatalogLegend, ChartLegend};

mod preview;
pub use preview::MapPreview;

mod session;
pub use session::{use_map_session, MapSession};

use dioxus::prelude::*;

use crate::chart::{self, fonts};
use crate::core::config;
use crate::t;

/// Form, live preview and export controls for one map.
///
/// The chart is recomputed from the current widget state on every render;
/// nothing is memoized. Title and picks come from the [`MapSession`].
#[component]
pub fn MapWorkspace() -> Element {
    let config = config::current();
    let MapSession {
        title, selection, ..
    } = use_map_session();

    let fonts = fonts::font_setup();
    let chart = chart::render_selection(
        &selection.read(),
        config.selection_order,
        &title(),
        &config.chart,
        &fonts.family_stack(),
    )
    .ok();

    let font_warning = fonts
        .resolution
        .needs_warning()
        .then(|| t!("map-font-fallback", family = fonts.resolution.fallback_family.clone()));

    rsx! {
        if let Some(warning) = font_warning {
            p { class: "map-banner map-banner--warning", "⚠️ {warning}" }
        }

        div { class: "map__panels",
            MapForm { title, selection }
            MapPreview { chart: chart.clone() }
        }

        if let Some(chart) = chart {
            MapExportPanel { chart }
        }
    }
}

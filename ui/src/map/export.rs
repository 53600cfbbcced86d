use std::future::Future;
use std::path::PathBuf;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[cfg(not(target_arch = "wasm32"))]
use crate::chart::raster::{self, RasterError};
use crate::chart::RenderedChart;
use crate::core::{format, platform};
use crate::t;

#[derive(Debug, Error)]
pub enum ExportError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("could not serialize map data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Platform(String),
}

#[cfg(target_arch = "wasm32")]
fn platform_error(message: &str) -> ExportError {
    ExportError::Platform(message.to_string())
}

/// Machine-readable copy of a map: what was charted and where each bar sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapExport {
    pub title: String,
    pub heading: String,
    /// RFC 3339, UTC.
    pub created_at: String,
    pub entries: Vec<MapExportEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapExportEntry {
    pub descriptor: String,
    pub category: String,
    pub color: String,
    pub intensity: u8,
    pub angle_deg: f64,
}

impl MapExport {
    pub fn from_chart(chart: &RenderedChart, created_at: OffsetDateTime) -> Self {
        Self {
            title: chart.title.clone(),
            heading: chart.heading.clone(),
            created_at: created_at
                .format(&Rfc3339)
                .unwrap_or_else(|_| created_at.unix_timestamp().to_string()),
            entries: chart
                .bars
                .iter()
                .map(|bar| MapExportEntry {
                    descriptor: bar.label.clone(),
                    category: bar.category.to_string(),
                    color: bar.color.to_string(),
                    intensity: bar.intensity.get(),
                    angle_deg: bar.angle.to_degrees(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[component]
pub fn MapExportPanel(chart: RenderedChart) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("map-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "map-card__meta map-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "map-card__meta map-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let filename = format::export_filename(&chart.title, "png");

    let png_handler = {
        let chart = chart.clone();
        move |_| {
            launch(
                status,
                busy,
                t!("map-export-working", format = "PNG"),
                perform_png_export(chart.clone()),
            )
        }
    };

    let svg_handler = {
        let chart = chart.clone();
        move |_| {
            launch(
                status,
                busy,
                t!("map-export-working", format = "SVG"),
                perform_svg_export(chart.clone()),
            )
        }
    };

    let json_handler = {
        let chart = chart.clone();
        move |_| {
            launch(
                status,
                busy,
                t!("map-export-working", format = "JSON"),
                perform_json_export(chart.clone()),
            )
        }
    };

    rsx! {
        section { class: "map-card map-export",
            div { class: "map-card__header",
                h2 { {t!("map-export-heading")} }
                span { class: "map-card__meta", "{filename}" }
            }

            p { {t!("map-export-intro")} }

            div { class: "map-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: png_handler,
                    {t!("map-export-png")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: svg_handler,
                    {t!("map-export-svg")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: json_handler,
                    {t!("map-export-json")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Run one export job, reflecting progress in `status`. Ignored while
/// another job is in flight.
fn launch<F>(mut status: Signal<ExportStatus>, mut busy: Signal<bool>, working: String, job: F)
where
    F: Future<Output = Result<String, ExportError>> + 'static,
{
    if busy() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(working));

    platform::spawn_future(async move {
        match job.await {
            Ok(message) => status.set(ExportStatus::Done(message)),
            Err(err) => {
                log::warn!("[export] {err}");
                status.set(ExportStatus::Error(err.to_string()));
            }
        }
        busy.set(false);
    });
}

async fn perform_png_export(chart: RenderedChart) -> Result<String, ExportError> {
    let png_bytes = build_png(&chart).await?;
    let filename = format::export_filename(&chart.title, "png");
    let delivery = download_bytes(&filename, "image/png", png_bytes).await?;
    Ok(delivered(delivery, &filename))
}

async fn perform_svg_export(chart: RenderedChart) -> Result<String, ExportError> {
    let filename = format::export_filename(&chart.title, "svg");
    let delivery =
        download_bytes(&filename, "image/svg+xml", chart.to_svg().into_bytes()).await?;
    Ok(delivered(delivery, &filename))
}

async fn perform_json_export(chart: RenderedChart) -> Result<String, ExportError> {
    let document = MapExport::from_chart(&chart, OffsetDateTime::now_utc());
    let json = serde_json::to_string_pretty(&document)?;

    let copied = match copy_to_clipboard(json.clone()).await {
        Ok(()) => true,
        Err(err) => {
            log::warn!("[export] clipboard unavailable: {err}");
            false
        }
    };

    let filename = format::export_filename(&chart.title, "json");
    let delivery = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    let message = delivered(delivery, &filename);
    Ok(if copied {
        format!("{} · {message}", t!("map-export-copied"))
    } else {
        message
    })
}

fn delivered(delivery: Option<String>, filename: &str) -> String {
    match delivery {
        Some(path) => t!("map-export-saved", path = path),
        None => t!("map-export-started", file = filename.to_string()),
    }
}

async fn build_png(chart: &RenderedChart) -> Result<Vec<u8>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        build_png_web(chart).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(raster::serialize(chart)?)
    }
}

#[cfg(target_arch = "wasm32")]
async fn build_png_web(chart: &RenderedChart) -> Result<Vec<u8>, ExportError> {
    use base64::Engine;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let svg_markup = chart.to_svg();
    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&svg_markup));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| platform_error("Unable to build SVG blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| platform_error("Unable to create SVG URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| platform_error("Document unavailable"))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| platform_error("Unable to create canvas"))?
        .dyn_into()
        .map_err(|_| platform_error("Canvas cast failed"))?;
    canvas.set_width(chart.width());
    canvas.set_height(chart.height());

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| platform_error("Canvas context unavailable"))?
        .ok_or_else(|| platform_error("Canvas context missing"))?
        .dyn_into()
        .map_err(|_| platform_error("Context cast failed"))?;

    let image = HtmlImageElement::new().map_err(|_| platform_error("Unable to create image"))?;
    image.set_src(&url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| platform_error("Image decode failed"))?;

    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|_| platform_error("Unable to draw image"))?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| platform_error("Unable to serialise canvas"))?;
    Url::revoke_object_url(&url).ok();

    let payload = data_url
        .split(',')
        .nth(1)
        .ok_or_else(|| platform_error("Malformed data URL"))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| platform_error("PNG decode failed"))
}

async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or_else(|| platform_error("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| platform_error("document unavailable"))?;
        let body = document.body().ok_or_else(|| platform_error("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| platform_error("Unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| platform_error("Textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(platform_error("Clipboard copy blocked"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Platform(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Platform(err.to_string()))
    }
}

/// Hand `bytes` to the platform: a browser download on the web, a file in
/// the export directory on desktop (whose path is returned).
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| platform_error("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| platform_error("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| platform_error("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| platform_error("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| platform_error("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| platform_error("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        std::fs::create_dir_all(&dir).map_err(|source| ExportError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(filename);
        std::fs::write(&path, &bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("[export] wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<PathBuf, ExportError> {
    if let Some(dir) = &crate::core::config::current().export_dir {
        return Ok(dir.clone());
    }
    let dirs = directories::ProjectDirs::from("com", "Affectmap", "affectmap").ok_or_else(|| {
        ExportError::Platform("Unable to determine export directory".to_string())
    })?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{render, ChartStyle};

    #[test]
    fn export_document_lists_bars_in_order() {
        let chart = render(
            &[("witty", 1), ("gazing", 5)],
            "Oldboy",
            &ChartStyle::default(),
            "sans-serif",
        )
        .unwrap();
        let stamp = OffsetDateTime::from_unix_timestamp(0).unwrap();
        let doc = MapExport::from_chart(&chart, stamp);

        assert_eq!(doc.title, "Oldboy");
        assert_eq!(doc.created_at, "1970-01-01T00:00:00Z");
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[1].descriptor, "gazing");
        assert_eq!(doc.entries[1].color, "#4682b4");
        assert!((doc.entries[1].angle_deg - 180.0).abs() < 1e-9);
        assert_eq!(doc.entries[0].intensity, 1);
        assert_eq!(doc.entries[1].intensity, 5);
    }

    #[test]
    fn export_document_is_valid_json() {
        let chart = render(&[("eerie", 2)], "x", &ChartStyle::default(), "sans-serif").unwrap();
        let doc = MapExport::from_chart(&chart, OffsetDateTime::UNIX_EPOCH);
        let json = serde_json::to_string(&doc).unwrap();
        let back: MapExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}

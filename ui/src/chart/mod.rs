//! Radial ("terrain") bar chart generation.
//!
//! [`render`] is the whole pipeline's pure core: it turns an ordered list of
//! `(descriptor, intensity)` pairs into a [`RenderedChart`] with fixed geometry.
//! The chart emits standalone SVG ([`RenderedChart::to_svg`]); the native
//! build rasterizes that markup to PNG in [`raster`].
//!
//! The form recomputes the chart from scratch on every interaction, so
//! nothing here is cached or incremental.

pub mod fonts;
mod layout;
#[cfg(not(target_arch = "wasm32"))]
pub mod raster;
mod svg;

pub use layout::{Bar, Frame, RADIAL_MAX};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::selection::{Intensity, Selection, SelectionOrder};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("select at least one descriptor to draw a map")]
    EmptySelection,
    #[error("intensity {value} for {descriptor:?} is outside 1..=5")]
    IntensityOutOfRange { descriptor: String, value: u8 },
}

/// Visual parameters of the chart. Every field has a default so partial
/// config files stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Edge length of the square output image, in pixels.
    pub size_px: u32,
    pub title_font_px: f64,
    pub label_font_px: f64,
    /// Share of the equal-spacing angle each bar occupies.
    pub bar_width_ratio: f64,
    pub bar_opacity: f64,
    pub edge_color: String,
    pub background: String,
    pub grid_color: String,
    pub text_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            size_px: 600,
            title_font_px: 20.0,
            label_font_px: 15.0,
            bar_width_ratio: 0.6,
            bar_opacity: 0.7,
            edge_color: "#000000".into(),
            background: "#ffffff".into(),
            grid_color: "#b0b0b0".into(),
            text_color: "#1a1a1a".into(),
        }
    }
}

impl ChartStyle {
    /// Clamp numeric fields into renderable ranges; non-finite values fall
    /// back to the defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };

        Self {
            size_px: self.size_px.clamp(200, 4096),
            title_font_px: finite_or(self.title_font_px, defaults.title_font_px).clamp(6.0, 96.0),
            label_font_px: finite_or(self.label_font_px, defaults.label_font_px).clamp(6.0, 96.0),
            bar_width_ratio: finite_or(self.bar_width_ratio, defaults.bar_width_ratio)
                .clamp(0.05, 1.0),
            bar_opacity: finite_or(self.bar_opacity, defaults.bar_opacity).clamp(0.0, 1.0),
            ..self
        }
    }
}

/// A laid-out chart, ready to be emitted as SVG or rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    /// The user-supplied work title.
    pub title: String,
    /// Figure heading, derived from `title`.
    pub heading: String,
    pub frame: Frame,
    pub bars: Vec<Bar>,
    pub style: ChartStyle,
    /// CSS-style family list used for all text.
    pub font_family: String,
}

impl RenderedChart {
    pub fn to_svg(&self) -> String {
        svg::to_svg(self)
    }

    pub fn width(&self) -> u32 {
        self.frame.width.round() as u32
    }

    pub fn height(&self) -> u32 {
        self.frame.height.round() as u32
    }
}

/// Heading attached to the figure for a given work title.
pub fn heading_for(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        "Affective Terrain Map".to_string()
    } else {
        format!("Affective Terrain Map ({title})")
    }
}

/// Lay out one bar per entry of `entries`, in the given order.
///
/// Every intensity must lie in `1..=5`; anything else is rejected rather
/// than drawn at a length that disagrees with the data.
pub fn render(
    entries: &[(&str, u8)],
    title: &str,
    style: &ChartStyle,
    font_family: &str,
) -> Result<RenderedChart, ChartError> {
    if entries.is_empty() {
        return Err(ChartError::EmptySelection);
    }

    let entries = entries
        .iter()
        .map(|&(descriptor, value)| {
            Intensity::new(value)
                .map(|intensity| (descriptor, intensity))
                .ok_or_else(|| ChartError::IntensityOutOfRange {
                    descriptor: descriptor.to_string(),
                    value,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let style = style.clone().sanitized();
    let frame = Frame::for_style(&style);
    let bars = layout::layout_bars(&entries, style.bar_width_ratio);

    Ok(RenderedChart {
        title: title.trim().to_string(),
        heading: heading_for(title),
        frame,
        bars,
        style,
        font_family: font_family.to_string(),
    })
}

/// [`render`] over a live selection.
pub fn render_selection(
    selection: &Selection,
    order: SelectionOrder,
    title: &str,
    style: &ChartStyle,
    font_family: &str,
) -> Result<RenderedChart, ChartError> {
    render(&selection.pairs(order), title, style, font_family)
}

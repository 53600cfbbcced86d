use std::f64::consts::TAU;

use super::fonts::{self, FontWeight};
use super::ChartStyle;
use crate::core::catalog;
use crate::core::selection::Intensity;

/// Outer edge of the radial axis, in intensity units.
pub const RADIAL_MAX: f64 = 5.0;

/// Space between the title block and the plot.
const TITLE_PAD_PX: f64 = 20.0;

/// Pixel geometry of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Radius of the outer spine, i.e. of intensity [`RADIAL_MAX`].
    pub radius: f64,
    pub title_baseline: f64,
}

impl Frame {
    pub(crate) fn for_style(style: &ChartStyle) -> Self {
        let size = style.size_px as f64;
        let margin = (size * 0.06).round();
        let title = fonts::measure(FontWeight::SemiBold, style.title_font_px);

        let title_top = (margin / 2.0).round();
        let title_baseline = title_top + title.asc;
        let plot_top = title_top + title.line_h + TITLE_PAD_PX;
        let available = (size - plot_top - margin).max(0.0);
        let radius = ((size - 2.0 * margin).min(available) / 2.0).max(1.0);

        Self {
            width: size,
            height: size,
            center_x: size / 2.0,
            center_y: plot_top + available / 2.0,
            radius,
            title_baseline,
        }
    }

    /// Pixels per intensity unit.
    pub fn scale(&self) -> f64 {
        self.radius / RADIAL_MAX
    }

    /// Screen position of a polar coordinate. Angle 0 points east and angles
    /// grow counter-clockwise; `r` is in intensity units.
    pub fn point(&self, angle: f64, r: f64) -> (f64, f64) {
        let px = r * self.scale();
        (
            self.center_x + px * angle.cos(),
            self.center_y - px * angle.sin(),
        )
    }
}

/// One radial bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub category: &'static str,
    pub color: &'static str,
    /// Radial length, in intensity units.
    pub intensity: Intensity,
    /// Center angle in radians.
    pub angle: f64,
    /// Angular width in radians.
    pub width: f64,
}

impl Bar {
    pub fn start_angle(&self) -> f64 {
        self.angle - self.width / 2.0
    }

    pub fn end_angle(&self) -> f64 {
        self.angle + self.width / 2.0
    }

    /// Radial length; always within `1..=RADIAL_MAX`.
    pub fn length(&self) -> f64 {
        f64::from(self.intensity.get())
    }

    /// Label anchor: mid-angle, half the bar's height.
    pub fn label_anchor(&self) -> (f64, f64) {
        (self.angle, self.length() / 2.0)
    }
}

pub(crate) fn layout_bars(entries: &[(&str, Intensity)], width_ratio: f64) -> Vec<Bar> {
    let step = TAU / entries.len() as f64;
    entries
        .iter()
        .enumerate()
        .map(|(i, (label, intensity))| {
            let category = catalog::category_of(label);
            Bar {
                label: label.to_string(),
                category,
                color: catalog::color_of(category),
                intensity: *intensity,
                angle: step * i as f64,
                width: step * width_ratio,
            }
        })
        .collect()
}
